//! In-place catalog ordering.
//!
//! Text keys compare byte-lexicographically (the natural `str` ordering),
//! so all uppercase ASCII sorts before lowercase and accented letters sort
//! after the ASCII range. The edition key compares numerically. Sorting is
//! not stable: records with equal keys may swap relative order.
//!
//! # Examples
//!
//! ```
//! use shelflist::{Book, Catalog, SortKey};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Cálculo", "Stewart", "Cengage", 7));
//! catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
//!
//! catalog.sort_by(SortKey::Title);
//! assert_eq!(catalog.get(0).unwrap().title, "Algoritmos");
//! ```

use crate::book::Book;
use crate::catalog::Catalog;
use std::cmp::Ordering;

/// Which record field an ordering pass compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Order by title bytes.
    Title,
    /// Order by author bytes.
    Author,
    /// Order by edition number.
    Edition,
}

impl SortKey {
    /// Compare two records under this key.
    #[must_use]
    pub fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Edition => a.edition.cmp(&b.edition),
        }
    }
}

impl Catalog {
    /// Reorder the catalog in place by the given key.
    ///
    /// Uses an unstable sort; records comparing equal under the key keep
    /// no particular relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::{Book, Catalog, SortKey};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add(Book::new("B", "x", "p", 3));
    /// catalog.add(Book::new("A", "y", "p", 1));
    ///
    /// catalog.sort_by(SortKey::Edition);
    /// assert_eq!(catalog.get(0).unwrap().edition, 1);
    /// ```
    pub fn sort_by(&mut self, key: SortKey) {
        self.books_mut().sort_unstable_by(|a, b| key.compare(a, b));
    }
}
