//! The in-memory catalog: an ordered, growable store of book records.
//!
//! [`Catalog`] preserves insertion order, allows duplicates on every field,
//! and supports exactly the mutations the record-management core needs:
//! appending, whole-catalog replacement, and in-place sorting (see
//! [`crate::sort`]). There is no record deletion and no in-place field
//! editing, so the catalog never hands out `&mut Book`.
//!
//! A session owns its catalog exclusively; every operation runs to
//! completion on the single calling thread, so no locking is involved.
//!
//! # Examples
//!
//! ```
//! use shelflist::{Book, Catalog};
//!
//! let mut catalog = Catalog::new();
//! let index = catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
//! assert_eq!(index, 0);
//! assert_eq!(catalog.len(), 1);
//!
//! for book in catalog.iter() {
//!     assert_eq!(book.title, "Algoritmos");
//! }
//! ```

use crate::book::Book;
use serde::{Deserialize, Serialize};

/// An ordered collection of [`Book`] records for one session.
///
/// Backed by a `Vec`, so capacity growth is amortized and not part of the
/// contract. Records keep their insertion order until [`sort_by`] rearranges
/// them.
///
/// [`sort_by`]: Catalog::sort_by
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog { books: Vec::new() }
    }

    /// Create an empty catalog with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Catalog {
            books: Vec::with_capacity(capacity),
        }
    }

    /// Append a record and return its catalog index.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::{Book, Catalog};
    ///
    /// let mut catalog = Catalog::new();
    /// assert_eq!(catalog.add(Book::new("A", "", "", 1)), 0);
    /// assert_eq!(catalog.add(Book::new("B", "", "", 1)), 1);
    /// ```
    pub fn add(&mut self, book: Book) -> usize {
        self.books.push(book);
        self.books.len() - 1
    }

    /// Replace the entire contents with `books`.
    ///
    /// The swap is atomic from the caller's perspective: the previous
    /// contents are dropped only after the replacement vector exists in
    /// full. This is the operation a loader uses to install a freshly read
    /// catalog.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    /// Number of records currently in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Iterate over the records in current catalog order.
    ///
    /// The iterator is finite and restartable; calling `iter` again starts
    /// over from the first record.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// All records in current order, as a shared slice.
    ///
    /// This is the pure-read "list everything" view handed to display
    /// layers.
    #[must_use]
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Mutable access for the sort engine. Not public: the catalog's
    /// contract excludes in-place field edits.
    pub(crate) fn books_mut(&mut self) -> &mut [Book] {
        &mut self.books
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Catalog { books }
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Catalog {
            books: iter.into_iter().collect(),
        }
    }
}

impl Extend<Book> for Catalog {
    fn extend<I: IntoIterator<Item = Book>>(&mut self, iter: I) {
        self.books.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Cálculo", "Stewart", "Cengage", 8));
        catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
        catalog
    }

    #[test]
    fn test_new_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut catalog = Catalog::with_capacity(16);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.add(Book::default()), 0);
    }

    #[test]
    fn test_add_returns_successive_indices() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add(Book::default()), 0);
        assert_eq!(catalog.add(Book::default()), 1);
        assert_eq!(catalog.add(Book::default()), 2);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut catalog = Catalog::new();
        let book = Book::new("Mesmo Livro", "Mesma Autora", "Mesma Editora", 1);
        catalog.add(book.clone());
        catalog.add(book.clone());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), catalog.get(1));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let catalog = sample();
        let titles: Vec<&str> = catalog.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Cálculo", "Algoritmos"]);
    }

    #[test]
    fn test_replace_all_swaps_contents() {
        let mut catalog = sample();
        catalog.replace_all(vec![Book::new("Novo", "N", "N", 1)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().title, "Novo");
    }

    #[test]
    fn test_replace_all_with_empty_clears() {
        let mut catalog = sample();
        catalog.replace_all(Vec::new());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let catalog = sample();
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_iter_is_restartable() {
        let catalog = sample();
        let first: usize = catalog.iter().count();
        let second: usize = catalog.iter().count();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_iterator_and_into_iterator() {
        let catalog: Catalog = sample().into_iter().collect();
        assert_eq!(catalog.len(), 2);
        let borrowed: Vec<&Book> = (&catalog).into_iter().collect();
        assert_eq!(borrowed.len(), 2);
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut catalog = Catalog::new();
        catalog.extend(sample());
        catalog.extend(vec![Book::new("Extra", "E", "E", 1)]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2).unwrap().title, "Extra");
    }
}
