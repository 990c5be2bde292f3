//! Common test helpers and utilities shared across the test suite.

use shelflist::{Book, Catalog};

/// Creates the standard set of books used by most tests.
///
/// Titles, authors, and editions are distinct so tests can assert on
/// ordering after a sort.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Cálculo", "Stewart", "Cengage", 7),
        Book::new("Algoritmos", "Cormen", "Elsevier", 3),
        Book::new("Biblioteca Central", "Ramos", "Atlas", 1),
        Book::new("Banco de Dados", "Elmasri", "Pearson", 6),
    ]
}

/// Creates a catalog holding `sample_books()` in insertion order.
pub fn sample_catalog() -> Catalog {
    sample_books().into_iter().collect()
}

/// Creates a catalog of records that exercise the quoting rule:
/// delimiters, quotes, and edge spaces inside fields.
pub fn specials_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Book::new("Nome;Com;PontoEVirgula", "Autor;X", "Edit;ora", 10));
    catalog.add(Book::new(
        "Nome com \"aspas\" internas",
        "Autor \"Y\"",
        "Editora \"Z\"",
        20,
    ));
    catalog.add(Book::new(" Espaços nas pontas ", "  Autor  ", " Editora ", 30));
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_books_are_distinct() {
        let books = sample_books();
        assert_eq!(books.len(), 4);
        assert!(books.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_sample_catalog_keeps_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(0).unwrap().title, "Cálculo");
        assert_eq!(catalog.get(3).unwrap().title, "Banco de Dados");
    }

    #[test]
    fn test_specials_catalog_has_quoteworthy_fields() {
        let catalog = specials_catalog();
        assert!(catalog.iter().any(|b| b.title.contains(';')));
        assert!(catalog.iter().any(|b| b.author.contains('"')));
        assert!(catalog.iter().any(|b| b.publisher.starts_with(' ')));
    }
}
