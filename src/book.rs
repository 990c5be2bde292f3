//! Book record structure and construction helpers.
//!
//! This module provides the core record type for catalog entries:
//! - [`Book`] — one title/author/publisher/edition tuple
//! - [`BookBuilder`] — fluent construction for call sites that fill fields
//!   incrementally
//!
//! A record is always fully populated: every text field holds a value, and
//! the empty string is a legal value for any of them. There is no uniqueness
//! constraint anywhere; two identical books are two catalog entries.
//!
//! # Examples
//!
//! ```
//! use shelflist::Book;
//!
//! let book = Book::new("Algoritmos", "Cormen", "Elsevier", 3);
//! assert_eq!(book.title, "Algoritmos");
//! assert_eq!(book.edition, 3);
//! ```
//!
//! With the builder:
//!
//! ```
//! use shelflist::Book;
//!
//! let book = Book::builder()
//!     .title("Banco de Dados")
//!     .author("Elmasri")
//!     .publisher("Pearson")
//!     .edition(6)
//!     .build();
//! assert_eq!(book.author, "Elmasri");
//! ```

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Fields are public: any combination of values is a valid record, so there
/// is no invariant for accessors to protect. Text fields are unbounded UTF-8
/// strings; the edition is a signed integer with no range restriction beyond
/// `i32` representability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title of the work.
    pub title: String,
    /// Author as entered, surname-first or not; the catalog does not care.
    pub author: String,
    /// Publishing house.
    pub publisher: String,
    /// Edition number. Negative values are representable and round-trip,
    /// even if catalogers are unlikely to enter them.
    pub edition: i32,
}

impl Book {
    /// Create a record from its four fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::Book;
    ///
    /// let book = Book::new("Cálculo", "Stewart", "Cengage", 8);
    /// assert_eq!(book.publisher, "Cengage");
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        edition: i32,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            edition,
        }
    }

    /// Create a builder for fluently constructing records.
    ///
    /// Unset text fields default to the empty string and the edition to 0,
    /// both of which are valid record values.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::Book;
    ///
    /// let book = Book::builder().title("Sem Autor").build();
    /// assert_eq!(book.author, "");
    /// assert_eq!(book.edition, 0);
    /// ```
    #[must_use]
    pub fn builder() -> BookBuilder {
        BookBuilder {
            book: Book::default(),
        }
    }
}

/// Builder for fluently constructing [`Book`] records.
///
/// # Examples
///
/// ```
/// use shelflist::Book;
///
/// let book = Book::builder()
///     .title("Estruturas de Dados")
///     .author("Weiss")
///     .publisher("Pearson")
///     .edition(3)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    /// Set the title of the record being built.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.book.title = title.into();
        self
    }

    /// Set the author of the record being built.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.book.author = author.into();
        self
    }

    /// Set the publisher of the record being built.
    #[must_use]
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.book.publisher = publisher.into();
        self
    }

    /// Set the edition of the record being built.
    #[must_use]
    pub fn edition(mut self, edition: i32) -> Self {
        self.book.edition = edition;
        self
    }

    /// Build the record.
    #[must_use]
    pub fn build(self) -> Book {
        self.book
    }
}
