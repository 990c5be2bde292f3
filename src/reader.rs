//! Reading catalog records from delimited text streams.
//!
//! This module provides [`CatalogReader`] for reading `;`-delimited catalog
//! lines from any source that implements [`std::io::BufRead`], plus the
//! [`load_catalog`] convenience for reading a whole file.
//!
//! The first line of a stream is always consumed as the column header and
//! is not validated. Data lines that fail to decode are skipped silently;
//! the [`lines_skipped`](CatalogReader::lines_skipped) counter is the only
//! trace they leave. Lines are acquired as raw bytes and checked for UTF-8
//! one at a time, so an encoding defect is confined to its own line.
//!
//! # Examples
//!
//! Reading records from a file:
//!
//! ```no_run
//! use shelflist::CatalogReader;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("catalog.csv")?;
//! let mut reader = CatalogReader::new(BufReader::new(file));
//!
//! while let Some(book) = reader.read_record()? {
//!     println!("{} ({}ª edição)", book.title, book.edition);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reading from a buffer:
//!
//! ```
//! use shelflist::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "title;author;publisher;edition\nAlgoritmos;Cormen;Elsevier;3\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//!
//! let book = reader.read_record()?.unwrap();
//! assert_eq!(book.title, "Algoritmos");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::book::Book;
use crate::catalog::Catalog;
use crate::csv;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for the `;`-delimited catalog text format.
///
/// `CatalogReader` reads one record per line from any source implementing
/// [`std::io::BufRead`]. The first line is discarded as the header; each
/// following line either decodes into a [`Book`] or is skipped.
///
/// # Examples
///
/// ```
/// use shelflist::CatalogReader;
/// use std::io::Cursor;
///
/// let data = "title;author;publisher;edition\nCálculo;Stewart;Cengage;7\n";
/// let mut reader = CatalogReader::new(Cursor::new(data));
///
/// match reader.read_record() {
///     Ok(Some(book)) => println!("Title: {}", book.title),
///     Ok(None) => println!("End of file"),
///     Err(e) => eprintln!("Error: {e}"),
/// }
/// ```
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    line_buf: Vec<u8>,
    header_skipped: bool,
    records_read: usize,
    lines_skipped: usize,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new catalog reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Any source implementing [`std::io::BufRead`]
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::CatalogReader;
    /// use std::io::Cursor;
    ///
    /// let reader = CatalogReader::new(Cursor::new("title;author;publisher;edition\n"));
    /// ```
    pub fn new(reader: R) -> Self {
        CatalogReader {
            reader,
            line_buf: Vec::new(),
            header_skipped: false,
            records_read: 0,
            lines_skipped: 0,
        }
    }

    /// Read a single catalog record.
    ///
    /// Returns `Ok(Some(book))` if a record was successfully read,
    /// `Ok(None)` if EOF was reached, or `Err` if an I/O error occurred.
    /// Lines that fail to decode are not errors: they are skipped, counted
    /// in [`lines_skipped`](Self::lines_skipped), and reading moves on.
    /// A line that is not valid UTF-8 fails to decode like any other
    /// malformed line; it never fails the read.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::CatalogReader;
    /// use std::io::Cursor;
    ///
    /// let data = "title;author;publisher;edition\nA;B;C;1\nlinha inválida\nD;E;F;2\n";
    /// let mut reader = CatalogReader::new(Cursor::new(data));
    ///
    /// assert_eq!(reader.read_record()?.unwrap().title, "A");
    /// assert_eq!(reader.read_record()?.unwrap().title, "D");
    /// assert!(reader.read_record()?.is_none());
    /// assert_eq!(reader.lines_skipped(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails.
    pub fn read_record(&mut self) -> Result<Option<Book>> {
        if !self.header_skipped {
            self.header_skipped = true;
            if !self.next_line()? {
                return Ok(None);
            }
        }

        loop {
            if !self.next_line()? {
                return Ok(None);
            }

            let mut bytes = self.line_buf.as_slice();
            if let Some(stripped) = bytes.strip_suffix(b"\n") {
                bytes = stripped;
            }
            if let Some(stripped) = bytes.strip_suffix(b"\r") {
                bytes = stripped;
            }

            // A line that is not valid UTF-8 is malformed like any other.
            let Ok(line) = std::str::from_utf8(bytes) else {
                self.lines_skipped += 1;
                continue;
            };

            match csv::decode_book(line) {
                Ok(book) => {
                    self.records_read += 1;
                    return Ok(Some(book));
                },
                Err(_) => {
                    self.lines_skipped += 1;
                },
            }
        }
    }

    /// Read all remaining records into a vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::CatalogReader;
    /// use std::io::Cursor;
    ///
    /// let data = "title;author;publisher;edition\nA;B;C;1\nD;E;F;2\n";
    /// let mut reader = CatalogReader::new(Cursor::new(data));
    ///
    /// let books = reader.read_all()?;
    /// assert_eq!(books.len(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails.
    pub fn read_all(&mut self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        while let Some(book) = self.read_record()? {
            books.push(book);
        }
        Ok(books)
    }

    /// Iterate over the remaining records.
    ///
    /// Each item is a `Result<Book>`; iteration ends at EOF. Skipped lines
    /// never surface as items.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelflist::CatalogReader;
    /// use std::io::Cursor;
    ///
    /// let data = "title;author;publisher;edition\nA;B;C;1\n";
    /// let mut reader = CatalogReader::new(Cursor::new(data));
    ///
    /// for result in reader.records() {
    ///     let book = result?;
    ///     println!("{}", book.title);
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self }
    }

    /// Number of records successfully read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of data lines skipped as malformed so far.
    ///
    /// Structurally undecodable lines and lines that are not valid UTF-8
    /// both count. The header line is not counted.
    #[must_use]
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Pull the next line's raw bytes into the reusable buffer. Returns
    /// `false` at EOF. UTF-8 validation happens per line in the caller.
    fn next_line(&mut self) -> Result<bool> {
        self.line_buf.clear();
        let bytes = self.reader.read_until(b'\n', &mut self.line_buf)?;
        Ok(bytes > 0)
    }
}

/// Iterator over the records of a [`CatalogReader`].
///
/// Created by [`CatalogReader::records`].
#[derive(Debug)]
pub struct Records<'a, R: BufRead> {
    reader: &'a mut CatalogReader<R>,
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<Book>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

/// Load a whole catalog file from `path`.
///
/// Opens the file, skips the header line, and accumulates every decodable
/// line into a new [`Catalog`]. Malformed lines are skipped silently; an
/// empty file loads as an empty catalog.
///
/// # Examples
///
/// ```no_run
/// use shelflist::load_catalog;
///
/// let catalog = load_catalog("catalog.csv")?;
/// println!("{} livros", catalog.len());
/// # Ok::<(), shelflist::CatalogError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let file = File::open(path)?;
    let mut reader = CatalogReader::new(BufReader::new(file));
    Ok(reader.read_all()?.into_iter().collect())
}
