//! Error types for the catalog crate.
//!
//! Covers everything that can go wrong while reading the seed files and
//! turning them into a `TechniqueIndex`.

use thiserror::Error;

use crate::types::TechniqueId;

/// Errors that can occur during catalog loading and parsing
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a seed file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its closed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two techniques in the seed data share an id
    #[error("Duplicate technique id: {0}")]
    DuplicateId(TechniqueId),

    /// Two techniques in the seed data share a slug
    #[error("Duplicate technique slug: {0}")]
    DuplicateSlug(String),

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
