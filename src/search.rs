//! Substring search over a catalog.
//!
//! Matching is a case-insensitive ASCII substring scan over the raw bytes
//! of the chosen field. Only the letters `A`-`Z`/`a`-`z` fold; bytes of
//! multi-byte UTF-8 sequences compare verbatim, so `"João"` matches the
//! query `"jo"` but an accented letter never matches its other case.
//!
//! # Examples
//!
//! ```
//! use shelflist::{Book, Catalog, SearchField};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Biblioteca Central", "Eco", "USP", 1));
//! catalog.add(Book::new("Química Geral", "Atkins", "Bookman", 5));
//!
//! let hits = catalog.find(SearchField::Title, "central");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Biblioteca Central");
//! ```

use crate::book::Book;
use crate::catalog::Catalog;

/// Which record field a search scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the title.
    Title,
    /// Match against the author.
    Author,
}

impl SearchField {
    /// The value this field selects out of a record.
    #[must_use]
    pub fn value_of(self, book: &Book) -> &str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

/// Whether `haystack` contains `needle`, folding ASCII letter case.
///
/// The scan is byte-wise: each window of `haystack` is compared with
/// [`slice::eq_ignore_ascii_case`]. An empty needle matches everything.
///
/// # Examples
///
/// ```
/// use shelflist::search::contains_ignore_ascii_case;
///
/// assert!(contains_ignore_ascii_case("Biblioteca Central", "CENTRAL"));
/// assert!(contains_ignore_ascii_case("João", "jo"));
/// assert!(!contains_ignore_ascii_case("João", "ao"));
/// ```
#[must_use]
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Find every record whose chosen field contains `query`, folding ASCII
/// letter case. Results keep catalog order; an empty query matches every
/// record.
#[must_use]
pub fn find<'a>(catalog: &'a Catalog, field: SearchField, query: &str) -> Vec<&'a Book> {
    catalog
        .iter()
        .filter(|book| contains_ignore_ascii_case(field.value_of(book), query))
        .collect()
}

impl Catalog {
    /// Find every record whose chosen field contains `query`, folding
    /// ASCII letter case. Method form of [`find`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::{Book, Catalog, SearchField};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add(Book::new("Cálculo", "Stewart", "Cengage", 7));
    /// catalog.add(Book::new("Física I", "Halliday", "LTC", 10));
    ///
    /// assert_eq!(catalog.find(SearchField::Author, "stew").len(), 1);
    /// assert_eq!(catalog.find(SearchField::Title, "").len(), 2);
    /// ```
    #[must_use]
    pub fn find(&self, field: SearchField, query: &str) -> Vec<&Book> {
        find(self, field, query)
    }
}
