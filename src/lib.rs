#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Shelflist
//!
//! A Rust library for keeping a catalog of books in memory and on disk,
//! using a `;`-delimited text format with quoted fields.
//!
//! ## Quick Start
//!
//! ### Building and saving a catalog
//!
//! ```
//! use shelflist::{Book, Catalog, CatalogWriter};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
//! catalog.add(Book::new("Cálculo", "Stewart", "Cengage", 7));
//!
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = CatalogWriter::new(&mut buffer);
//!     writer.write_catalog(&catalog)?;
//!     writer.finish()?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Reading a catalog back
//!
//! ```
//! use shelflist::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "title;author;publisher;edition\nAlgoritmos;Cormen;Elsevier;3\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//!
//! while let Some(book) = reader.read_record()? {
//!     println!("{} — {}", book.title, book.author);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Searching and sorting
//!
//! ```
//! use shelflist::{Book, Catalog, SearchField, SortKey};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Biblioteca Central", "Eco", "USP", 1));
//! catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
//!
//! let hits = catalog.find(SearchField::Title, "central");
//! assert_eq!(hits.len(), 1);
//!
//! catalog.sort_by(SortKey::Title);
//! assert_eq!(catalog.get(0).unwrap().title, "Algoritmos");
//! ```
//!
//! ## Modules
//!
//! - [`book`] — The record type ([`Book`]) and its builder
//! - [`catalog`] — The in-memory record store ([`Catalog`])
//! - [`csv`] — The `;`-delimited line codec with quoting
//! - [`reader`] — Reading catalogs from text streams
//! - [`writer`] — Writing catalogs as delimited text
//! - [`search`] — Case-insensitive substring search
//! - [`sort`] — In-place catalog ordering
//! - [`json`] — JSON serialization/deserialization
//! - [`error`] — Error types and result type

pub mod book;
pub mod catalog;
pub mod csv;
pub mod error;
pub mod json;
pub mod reader;
pub mod search;
pub mod sort;
pub mod writer;

pub use book::{Book, BookBuilder};
pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use reader::{load_catalog, CatalogReader};
pub use search::SearchField;
pub use sort::SortKey;
pub use writer::{save_catalog, CatalogWriter};
