//! Build a catalog, save it to disk, and load it back.
//!
//! This example demonstrates the full persistence cycle: constructing
//! records with `Book::new` and the builder, saving with `save_catalog`,
//! and reloading with `load_catalog`.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example build_catalog -- [output_file.csv]
//! ```
//!
//! If no output file is specified, writes to `catalog.csv` in the current
//! directory.

use shelflist::{load_catalog, save_catalog, Book, Catalog};
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map_or("catalog.csv", String::as_str);

    let mut catalog = Catalog::new();

    let index = catalog.add(Book::new("Algoritmos", "Cormen", "Elsevier", 3));
    println!("Added \"Algoritmos\" at index {index}");

    catalog.add(Book::new("Banco de Dados", "Elmasri", "Pearson", 6));
    catalog.add(
        Book::builder()
            .title("Cálculo")
            .author("Stewart")
            .publisher("Cengage")
            .edition(7)
            .build(),
    );

    // Fields with delimiters, quotes, or edge spaces survive the trip.
    catalog.add(Book::new("Nome;Com;PontoEVirgula", "Autor \"X\"", " Editora ", 10));

    save_catalog(path, &catalog)?;
    println!("Saved {} records to {path}", catalog.len());

    let restored = load_catalog(path)?;
    println!("\nLoaded {} records back:", restored.len());
    for book in &restored {
        println!(
            "  {} | {} | {} | edition {}",
            book.title, book.author, book.publisher, book.edition
        );
    }

    assert_eq!(restored, catalog);
    println!("\nRound trip preserved every field.");

    Ok(())
}
