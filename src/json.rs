//! JSON serialization and deserialization of catalog data.
//!
//! This module converts records and whole catalogs to and from a generic
//! JSON representation, for interchange with tools that do not speak the
//! delimited line format. A book becomes an object with `title`, `author`,
//! `publisher`, and `edition` keys; a catalog becomes an object holding a
//! `books` array.
//!
//! # Examples
//!
//! ```
//! use shelflist::{json, Book, Catalog};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
//!
//! let value = json::catalog_to_json(&catalog)?;
//! assert_eq!(value["books"][0]["title"], "Algoritmos");
//!
//! let restored = json::json_to_catalog(&value)?;
//! assert_eq!(restored, catalog);
//! # Ok::<(), shelflist::CatalogError>(())
//! ```

use crate::book::Book;
use crate::catalog::Catalog;
use crate::error::Result;
use serde_json::Value;

/// Convert a single record to JSON.
///
/// # Examples
///
/// ```
/// use shelflist::{json, Book};
///
/// let value = json::book_to_json(&Book::new("Cálculo", "Stewart", "Cengage", 7))?;
/// assert_eq!(value["edition"], 7);
/// # Ok::<(), shelflist::CatalogError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the record cannot be converted to JSON.
pub fn book_to_json(book: &Book) -> Result<Value> {
    Ok(serde_json::to_value(book)?)
}

/// Convert JSON back to a single record.
///
/// Reverses the transformation performed by [`book_to_json`].
///
/// # Errors
///
/// Returns an error if the JSON is missing a field or a field has the
/// wrong type.
pub fn json_to_book(json: &Value) -> Result<Book> {
    Ok(serde_json::from_value(json.clone())?)
}

/// Convert a whole catalog to JSON.
///
/// # Errors
///
/// Returns an error if the catalog cannot be converted to JSON.
pub fn catalog_to_json(catalog: &Catalog) -> Result<Value> {
    Ok(serde_json::to_value(catalog)?)
}

/// Convert JSON back to a whole catalog.
///
/// Reverses the transformation performed by [`catalog_to_json`].
///
/// # Errors
///
/// Returns an error if the JSON does not hold a `books` array of valid
/// records.
pub fn json_to_catalog(json: &Value) -> Result<Catalog> {
    Ok(serde_json::from_value(json.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_to_json_shape() {
        let value = book_to_json(&Book::new("Algoritmos", "Cormen", "Elsevier", 3)).unwrap();
        assert_eq!(value["title"], "Algoritmos");
        assert_eq!(value["author"], "Cormen");
        assert_eq!(value["publisher"], "Elsevier");
        assert_eq!(value["edition"], 3);
    }

    #[test]
    fn test_json_to_book() {
        let value = json!({
            "title": "Banco de Dados",
            "author": "Elmasri",
            "publisher": "Pearson",
            "edition": 6
        });
        let book = json_to_book(&value).unwrap();
        assert_eq!(book, Book::new("Banco de Dados", "Elmasri", "Pearson", 6));
    }

    #[test]
    fn test_book_json_roundtrip() {
        let book = Book::new("Nome;Com;PontoEVirgula", "Autor \"X\"", " Editora ", -2);
        let restored = json_to_book(&book_to_json(&book).unwrap()).unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("A", "B", "C", 1));
        catalog.add(Book::new("D", "E", "F", 2));

        let value = catalog_to_json(&catalog).unwrap();
        let restored = json_to_catalog(&value).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_empty_catalog_roundtrip() {
        let value = catalog_to_json(&Catalog::new()).unwrap();
        assert_eq!(value["books"], json!([]));
        assert!(json_to_catalog(&value).unwrap().is_empty());
    }

    #[test]
    fn test_json_to_book_missing_field_fails() {
        let value = json!({ "title": "só título" });
        assert!(json_to_book(&value).is_err());
    }

    #[test]
    fn test_json_to_book_wrong_edition_type_fails() {
        let value = json!({
            "title": "T",
            "author": "A",
            "publisher": "P",
            "edition": "três"
        });
        assert!(json_to_book(&value).is_err());
    }

    #[test]
    fn test_json_to_catalog_wrong_shape_fails() {
        assert!(json_to_catalog(&json!([1, 2, 3])).is_err());
        assert!(json_to_catalog(&json!("texto")).is_err());
    }
}
