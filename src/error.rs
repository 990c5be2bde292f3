//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog library
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all catalog library operations.
///
/// Represents the error conditions that can occur while decoding catalog
/// lines, reading or writing catalog files, or converting records.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error indicating a line that does not decode into a complete record.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Error indicating an edition column that does not convert to an integer.
    #[error("Invalid edition: {0}")]
    InvalidEdition(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from JSON conversion of records.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
