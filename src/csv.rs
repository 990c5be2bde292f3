//! The quoted-delimited line codec for catalog records.
//!
//! This module implements the text format catalog files are made of:
//! one record per line, fields joined by `;`, RFC4180-style quoting with
//! `"` as the quote character and doubled quotes as the escape. It is the
//! most intricate part of the crate; the readers and writers in
//! [`crate::reader`] and [`crate::writer`] are thin layers over it.
//!
//! # API Patterns
//!
//! - **Encode**: [`encode_book`] — one record to one line (no terminator)
//! - **Decode**: [`decode_book`] — one line back to a record, or an error
//! - [`HEADER`] — the fixed column header written at the top of every file
//!
//! # Quoting rule
//!
//! A text field is wrapped in quotes iff it contains the delimiter, a
//! quote, CR, LF, or a leading or trailing space; inside quotes every
//! literal `"` is doubled. The edition column is a bare decimal integer
//! and is never quoted on encode (a quoted integer still decodes).
//!
//! # Examples
//!
//! ```
//! use shelflist::{csv, Book};
//!
//! let book = Book::new("Algoritmos", "Cormen", "Elsevier", 3);
//! let line = csv::encode_book(&book);
//! assert_eq!(line, "Algoritmos;Cormen;Elsevier;3");
//!
//! let back = csv::decode_book(&line)?;
//! assert_eq!(back, book);
//! # Ok::<(), shelflist::CatalogError>(())
//! ```
//!
//! Fields containing the delimiter, quotes, or edge spaces survive exactly:
//!
//! ```
//! use shelflist::{csv, Book};
//!
//! let book = Book::new("Nome;Com;PontoEVirgula", "Autor \"X\"", " Editora ", 10);
//! let line = csv::encode_book(&book);
//! assert_eq!(csv::decode_book(&line)?, book);
//! # Ok::<(), shelflist::CatalogError>(())
//! ```

use crate::book::Book;
use crate::error::{CatalogError, Result};
use std::fmt::Write;

/// The column delimiter between fields.
const DELIMITER: u8 = b';';

/// The quote character opening and closing an escaped field.
const QUOTE: u8 = b'"';

/// The fixed header line written at the top of every catalog file.
///
/// Written verbatim on save; skipped without validation on load.
pub const HEADER: &str = "title;author;publisher;edition";

/// Encode one record as a delimited line.
///
/// Produces `title;author;publisher;edition` with each text field passed
/// through the quoting rule and the edition rendered in decimal (with a
/// leading `-` for negative values). The line carries no terminating
/// newline; the writer owns line termination.
///
/// # Examples
///
/// ```
/// use shelflist::{csv, Book};
///
/// let line = csv::encode_book(&Book::new("Cálculo", "Stewart", "Cengage", -2));
/// assert_eq!(line, "Cálculo;Stewart;Cengage;-2");
/// ```
#[must_use]
pub fn encode_book(book: &Book) -> String {
    let mut line = String::with_capacity(
        book.title.len() + book.author.len() + book.publisher.len() + 16,
    );
    encode_field(&mut line, &book.title);
    line.push(';');
    encode_field(&mut line, &book.author);
    line.push(';');
    encode_field(&mut line, &book.publisher);
    line.push(';');
    write!(line, "{}", book.edition).ok();
    line
}

/// Decode one line back into a record.
///
/// Expects exactly three text fields followed by one integer field,
/// delimiter-separated. A field opening with a quote runs to the next
/// unescaped closing quote (doubled quotes un-escape to one); a bare field
/// runs to the next unquoted delimiter, CR, LF, or end of input. The
/// edition is converted with `strtol`-compatible leniency: optional leading
/// ASCII whitespace and sign, then decimal digits; bytes after the digits
/// are ignored.
///
/// Input may carry embedded CR/LF inside quoted fields; this function
/// handles them, even though the line-oriented file layer cannot.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] when a required column is
/// absent, and [`CatalogError::InvalidEdition`] when the edition field has
/// no digits or overflows an `i32`.
///
/// # Examples
///
/// ```
/// use shelflist::csv;
///
/// let book = csv::decode_book("\"Nome;Composto\";Autor;Editora;7")?;
/// assert_eq!(book.title, "Nome;Composto");
/// assert_eq!(book.edition, 7);
///
/// assert!(csv::decode_book("faltando;o;resto").is_err());
/// # Ok::<(), shelflist::CatalogError>(())
/// ```
pub fn decode_book(line: &str) -> Result<Book> {
    let bytes = line.as_bytes();

    let (title, pos) = scan_field(line, 0);
    let pos = expect_delimiter(bytes, pos, "author")?;
    let (author, pos) = scan_field(line, pos);
    let pos = expect_delimiter(bytes, pos, "publisher")?;
    let (publisher, pos) = scan_field(line, pos);
    let pos = expect_delimiter(bytes, pos, "edition")?;
    let (edition_field, _) = scan_field(line, pos);
    let edition = parse_edition(&edition_field)?;

    Ok(Book {
        title,
        author,
        publisher,
        edition,
    })
}

/// Append `field` to `out`, quoting and escaping when the quoting rule
/// requires it.
fn encode_field(out: &mut String, field: &str) {
    if needs_quoting(field) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// Whether a text field must be quoted to survive a round trip.
fn needs_quoting(field: &str) -> bool {
    field.starts_with(' ')
        || field.ends_with(' ')
        || field
            .bytes()
            .any(|b| matches!(b, DELIMITER | QUOTE | b'\r' | b'\n'))
}

/// Scan one field starting at byte offset `start`.
///
/// Returns the field's value and the offset of the byte that stopped the
/// scan (the delimiter, CR, LF, or `line.len()`). All stop bytes are
/// ASCII, so every returned offset is a `char` boundary.
fn scan_field(line: &str, start: usize) -> (String, usize) {
    if line.as_bytes().get(start) == Some(&QUOTE) {
        scan_quoted(line, start + 1)
    } else {
        scan_bare(line, start)
    }
}

/// Scan an unquoted field: everything up to the next delimiter, CR, LF,
/// or end of input. Quotes past the first byte are literal content.
fn scan_bare(line: &str, start: usize) -> (String, usize) {
    let end = memchr::memchr3(DELIMITER, b'\r', b'\n', &line.as_bytes()[start..])
        .map_or(line.len(), |i| start + i);
    (line[start..end].to_string(), end)
}

/// Scan a quoted field whose content begins at `start` (past the opening
/// quote). Doubled quotes collapse to one literal quote; after the closing
/// quote, anything up to the next delimiter, CR, LF, or end of input is
/// discarded. A quote that never closes consumes the rest of the line as
/// content, which the caller then rejects for missing columns.
fn scan_quoted(line: &str, start: usize) -> (String, usize) {
    let bytes = line.as_bytes();
    let mut value = String::new();
    let mut cursor = start;

    loop {
        let Some(offset) = memchr::memchr(QUOTE, &bytes[cursor..]) else {
            value.push_str(&line[cursor..]);
            return (value, line.len());
        };
        let quote_at = cursor + offset;
        value.push_str(&line[cursor..quote_at]);

        if bytes.get(quote_at + 1) == Some(&QUOTE) {
            value.push('"');
            cursor = quote_at + 2;
        } else {
            let end = memchr::memchr3(DELIMITER, b'\r', b'\n', &bytes[quote_at + 1..])
                .map_or(line.len(), |i| quote_at + 1 + i);
            return (value, end);
        }
    }
}

/// Require the delimiter at `pos`, returning the offset just past it.
fn expect_delimiter(bytes: &[u8], pos: usize, column: &str) -> Result<usize> {
    if bytes.get(pos) == Some(&DELIMITER) {
        Ok(pos + 1)
    } else {
        Err(CatalogError::InvalidRecord(format!(
            "missing {column} column"
        )))
    }
}

/// Convert an edition field to `i32` with `strtol`-compatible semantics:
/// optional leading ASCII whitespace, optional sign, then decimal digits.
/// Fails if no digit was consumed or the value does not fit; trailing
/// bytes after the digits are ignored.
fn parse_edition(field: &str) -> Result<i32> {
    let bytes = field.as_bytes();
    let mut pos = 0;

    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        },
        Some(b'+') => {
            pos += 1;
            false
        },
        _ => false,
    };

    let digits_start = pos;
    let mut value: i32 = 0;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i32::from(b - b'0');
        // Accumulate on the negative side when signed so i32::MIN parses.
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or_else(|| {
                CatalogError::InvalidEdition(format!("'{field}' overflows a 32-bit integer"))
            })?;
        pos += 1;
    }

    if pos == digits_start {
        return Err(CatalogError::InvalidEdition(format!(
            "no digits in '{field}'"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_column_order() {
        assert_eq!(HEADER, "title;author;publisher;edition");
    }

    #[test]
    fn test_encode_plain_fields() {
        let book = Book::new("Estruturas de Dados", "Weiss", "Pearson", 3);
        assert_eq!(encode_book(&book), "Estruturas de Dados;Weiss;Pearson;3");
    }

    #[test]
    fn test_encode_quotes_field_with_delimiter() {
        let book = Book::new("Nome;Com;PontoEVirgula", "Autor", "Editora", 10);
        assert_eq!(
            encode_book(&book),
            "\"Nome;Com;PontoEVirgula\";Autor;Editora;10"
        );
    }

    #[test]
    fn test_encode_doubles_quotes() {
        let book = Book::new("Nome com \"aspas\" internas", "A", "E", 20);
        assert_eq!(
            encode_book(&book),
            "\"Nome com \"\"aspas\"\" internas\";A;E;20"
        );
    }

    #[test]
    fn test_encode_quotes_edge_spaces() {
        let book = Book::new(" Espaços nas pontas ", "interior space ok", "E", 30);
        assert_eq!(
            encode_book(&book),
            "\" Espaços nas pontas \";interior space ok;E;30"
        );
    }

    #[test]
    fn test_encode_quotes_newline() {
        let book = Book::new("linha\nquebrada", "A", "E", 1);
        assert_eq!(encode_book(&book), "\"linha\nquebrada\";A;E;1");
    }

    #[test]
    fn test_encode_negative_edition_is_bare() {
        let book = Book::new("T", "A", "E", -4);
        assert_eq!(encode_book(&book), "T;A;E;-4");
    }

    #[test]
    fn test_decode_simple_line() {
        let book = decode_book("Algoritmos;Cormen;Elsevier;3").unwrap();
        assert_eq!(book, Book::new("Algoritmos", "Cormen", "Elsevier", 3));
    }

    #[test]
    fn test_decode_empty_text_fields() {
        let book = decode_book(";;;0").unwrap();
        assert_eq!(book, Book::new("", "", "", 0));
    }

    #[test]
    fn test_decode_quoted_fields() {
        let book = decode_book("\"a;b\";\"c\"\"d\"\"\";\" e \";7").unwrap();
        assert_eq!(book.title, "a;b");
        assert_eq!(book.author, "c\"d\"");
        assert_eq!(book.publisher, " e ");
        assert_eq!(book.edition, 7);
    }

    #[test]
    fn test_decode_bare_field_keeps_interior_quote() {
        let book = decode_book("ab\"c;x;y;1").unwrap();
        assert_eq!(book.title, "ab\"c");
    }

    #[test]
    fn test_decode_ignores_junk_after_closing_quote() {
        let book = decode_book("\"t\"junk;a;p;1").unwrap();
        assert_eq!(book.title, "t");
        assert_eq!(book.author, "a");
    }

    #[test]
    fn test_decode_ignores_extra_columns() {
        let book = decode_book("a;b;c;3;sobra").unwrap();
        assert_eq!(book.edition, 3);
    }

    #[test]
    fn test_decode_quoted_edition() {
        let book = decode_book("a;b;c;\"42\"").unwrap();
        assert_eq!(book.edition, 42);
    }

    #[test]
    fn test_decode_edition_with_trailing_text() {
        let book = decode_book("a;b;c;3rd").unwrap();
        assert_eq!(book.edition, 3);
    }

    #[test]
    fn test_decode_edition_with_leading_space_and_sign() {
        assert_eq!(decode_book("a;b;c; -9").unwrap().edition, -9);
        assert_eq!(decode_book("a;b;c;+5").unwrap().edition, 5);
    }

    #[test]
    fn test_decode_missing_columns_fails() {
        assert!(decode_book("").is_err());
        assert!(decode_book("só título").is_err());
        assert!(decode_book("a;b").is_err());
        assert!(decode_book("a;b;c").is_err());
    }

    #[test]
    fn test_decode_edition_without_digits_fails() {
        assert!(decode_book("a;b;c;").is_err());
        assert!(decode_book("a;b;c;x").is_err());
        assert!(decode_book("a;b;c;-").is_err());
    }

    #[test]
    fn test_decode_edition_overflow_fails() {
        assert!(decode_book("a;b;c;2147483648").is_err());
        assert!(decode_book("a;b;c;99999999999").is_err());
    }

    #[test]
    fn test_decode_edition_extremes() {
        assert_eq!(decode_book("a;b;c;2147483647").unwrap().edition, i32::MAX);
        assert_eq!(decode_book("a;b;c;-2147483648").unwrap().edition, i32::MIN);
    }

    #[test]
    fn test_decode_unterminated_quote_fails() {
        assert!(decode_book("\"aberto;a;p;1").is_err());
    }

    #[test]
    fn test_round_trip_special_characters() {
        let books = [
            Book::new("Nome;Com;PontoEVirgula", "Autor;X", "Edit;ora", 10),
            Book::new("Nome com \"aspas\" internas", "Autor \"Y\"", "Editora \"Z\"", 20),
            Book::new(" Espaços nas pontas ", "  Autor  ", " Editora ", 30),
        ];
        for book in &books {
            assert_eq!(&decode_book(&encode_book(book)).unwrap(), book);
        }
    }

    #[test]
    fn test_round_trip_embedded_line_breaks() {
        let book = Book::new("linha\nquebrada", "autor\r\ncomposto", "E", 2);
        assert_eq!(decode_book(&encode_book(&book)).unwrap(), book);
    }

    #[test]
    fn test_round_trip_edition_extremes() {
        for edition in [i32::MIN, -1, 0, 1, i32::MAX] {
            let book = Book::new("t", "a", "p", edition);
            assert_eq!(decode_book(&encode_book(&book)).unwrap(), book);
        }
    }

    #[test]
    fn test_round_trip_non_ascii_text() {
        let book = Book::new("Cálculo", "João", "Editora Ação", 1);
        assert_eq!(decode_book(&encode_book(&book)).unwrap(), book);
    }
}
