//! Errors reported by a datastore or identity backend.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A row referenced another row that does not exist
    #[error("insert into {table} violates foreign key: {key}")]
    ForeignKey { table: &'static str, key: String },

    /// The backend could not serve the request. `MemoryStore` never returns
    /// this; it is for remote backends.
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
