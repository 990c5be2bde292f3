//! Searching and sorting an in-memory catalog.
//!
//! This example demonstrates case-insensitive substring search over title
//! and author, and in-place sorting by each of the three keys.

use shelflist::{Book, Catalog, SearchField, SortKey};

fn main() {
    let catalog = sample_catalog();

    println!("\n=== Search by Title ===\n");
    search_by_title(&catalog);

    println!("\n=== Search by Author ===\n");
    search_by_author(&catalog);

    println!("\n=== Sorting ===\n");
    sorting(&catalog);
}

/// Helper function to build a small demonstration catalog.
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Book::new("Biblioteca Central", "Umberto Eco", "USP", 1));
    catalog.add(Book::new("Cálculo", "João Stewart", "Cengage", 7));
    catalog.add(Book::new("Algoritmos", "Thomas Cormen", "Elsevier", 3));
    catalog.add(Book::new("Banco de Dados", "Ramez Elmasri", "Pearson", 6));
    catalog
}

fn search_by_title(catalog: &Catalog) {
    // ASCII letters fold case; "central" finds "Central".
    for book in catalog.find(SearchField::Title, "central") {
        println!("  match: {}", book.title);
    }

    // An empty query matches every record, in catalog order.
    let all = catalog.find(SearchField::Title, "");
    println!("  empty query matched {} records", all.len());
}

fn search_by_author(catalog: &Catalog) {
    // Byte-wise matching: "jo" matches "João", "JOÃO" would not match "joão".
    for book in catalog.find(SearchField::Author, "jo") {
        println!("  match: {} by {}", book.title, book.author);
    }
}

fn sorting(catalog: &Catalog) {
    let mut by_title = catalog.clone();
    by_title.sort_by(SortKey::Title);
    println!("By title:");
    for book in &by_title {
        println!("  {}", book.title);
    }

    let mut by_author = catalog.clone();
    by_author.sort_by(SortKey::Author);
    println!("By author:");
    for book in &by_author {
        println!("  {}", book.author);
    }

    let mut by_edition = catalog.clone();
    by_edition.sort_by(SortKey::Edition);
    println!("By edition:");
    for book in &by_edition {
        println!("  {} ({})", book.edition, book.title);
    }
}
