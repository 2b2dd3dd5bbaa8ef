//! Error types for the recommender crate.
//!
//! Finding nothing that fits is not an error; it is an empty result. The
//! only structural failure is an input outside its closed vocabulary.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// An input value is not one of the accepted values for its field
    #[error("Invalid {field}: {value:?}")]
    InvalidArgument { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, RecommendError>;
