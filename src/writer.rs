//! Writing catalog records as delimited text.
//!
//! This module provides [`CatalogWriter`] for serializing [`Book`] records
//! to the `;`-delimited line format, plus the [`save_catalog`] convenience
//! for writing a whole file. The fixed column header goes out before the
//! first record (or on [`finish`](CatalogWriter::finish) when nothing was
//! written, so an empty catalog still produces a header-only file).
//!
//! # Examples
//!
//! Writing records to a file:
//!
//! ```no_run
//! use shelflist::{Book, CatalogWriter};
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! let file = File::create("catalog.csv")?;
//! let mut writer = CatalogWriter::new(BufWriter::new(file));
//!
//! writer.write_record(&Book::new("Algoritmos", "Cormen", "Elsevier", 3))?;
//! writer.finish()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Writing to a buffer:
//!
//! ```
//! use shelflist::{Book, CatalogWriter};
//!
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = CatalogWriter::new(&mut buffer);
//!     writer.write_record(&Book::new("A", "B", "C", 1))?;
//!     writer.finish()?;
//! }
//! assert_eq!(buffer, b"title;author;publisher;edition\nA;B;C;1\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::book::Book;
use crate::catalog::Catalog;
use crate::csv;
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer for the `;`-delimited catalog text format.
///
/// `CatalogWriter` serializes [`Book`] records one per line to any
/// destination implementing [`std::io::Write`]. Output is sequential with
/// no rollback: if a write fails partway through a catalog, the lines
/// already written stay in the destination.
///
/// # Examples
///
/// ```
/// use shelflist::{Book, CatalogWriter};
///
/// let mut buffer = Vec::new();
/// let mut writer = CatalogWriter::new(&mut buffer);
/// writer.write_record(&Book::new("Cálculo", "Stewart", "Cengage", 7))?;
/// writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    header_written: bool,
    records_written: usize,
    finished: bool,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer.
    ///
    /// # Arguments
    ///
    /// * `writer` - Any destination implementing [`std::io::Write`]
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::CatalogWriter;
    /// let buffer = Vec::new();
    /// let writer = CatalogWriter::new(buffer);
    /// ```
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            header_written: false,
            records_written: 0,
            finished: false,
        }
    }

    /// Write a single catalog record.
    ///
    /// Writes the header first if no line has gone out yet, then the
    /// record as one encoded line with a trailing newline.
    ///
    /// A record whose text fields carry embedded CR or LF is written in
    /// quoted form, but the line-oriented reader cannot reassemble it.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::{Book, CatalogWriter};
    ///
    /// let mut buffer = Vec::new();
    /// let mut writer = CatalogWriter::new(&mut buffer);
    /// writer.write_record(&Book::new("A", "B", "C", 1))?;
    /// assert_eq!(writer.records_written(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the writer was finished or an I/O error occurs.
    pub fn write_record(&mut self, book: &Book) -> Result<()> {
        self.check_open()?;
        self.ensure_header()?;

        self.writer.write_all(csv::encode_book(book).as_bytes())?;
        self.writer.write_all(b"\n")?;

        self.records_written += 1;
        Ok(())
    }

    /// Write every record of a catalog in order.
    ///
    /// The header goes out even when the catalog is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::{Book, Catalog, CatalogWriter};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add(Book::new("A", "B", "C", 1));
    /// catalog.add(Book::new("D", "E", "F", 2));
    ///
    /// let mut buffer = Vec::new();
    /// let mut writer = CatalogWriter::new(&mut buffer);
    /// writer.write_catalog(&catalog)?;
    /// assert_eq!(writer.records_written(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the writer was finished or an I/O error occurs.
    /// Records already written before the failure are not rolled back.
    pub fn write_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        self.check_open()?;
        self.ensure_header()?;
        for book in catalog {
            self.write_record(book)?;
        }
        Ok(())
    }

    /// Flush the writer and mark it as finished.
    ///
    /// Writes the header first if nothing was written yet. After calling
    /// `finish`, no more records can be written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the header or flushing fails.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_header()?;
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Returns the number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn check_open(&self) -> Result<()> {
        if self.finished {
            return Err(CatalogError::InvalidRecord(
                "Cannot write to a finished writer".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_all(csv::HEADER.as_bytes())?;
            self.writer.write_all(b"\n")?;
            self.header_written = true;
        }
        Ok(())
    }
}

/// Save a whole catalog to the file at `path`.
///
/// Creates the file (truncating an existing one), writes the header line,
/// then one line per record in catalog order. If writing fails partway,
/// the file keeps whatever was written before the failure.
///
/// # Examples
///
/// ```no_run
/// use shelflist::{save_catalog, Book, Catalog};
///
/// let mut catalog = Catalog::new();
/// catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
/// save_catalog("catalog.csv", &catalog)?;
/// # Ok::<(), shelflist::CatalogError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = CatalogWriter::new(BufWriter::new(file));
    writer.write_catalog(catalog)?;
    writer.finish()
}
