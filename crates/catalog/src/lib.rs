//! # Catalog Crate
//!
//! Domain types and seed-data loading for the routine recommender.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Technique, AnxietySymptom, TimePreference, Account)
//! - **parser**: Parse the `::`-separated seed files into Rust structs
//! - **index**: Build the `TechniqueIndex` and load a whole `Dataset`
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//! let technique = dataset.techniques.get_by_slug("box_breathing").unwrap();
//! println!("{} takes {} min", technique.name, technique.duration_minutes);
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use index::Dataset;
pub use types::{
    // Type aliases
    AthleteId,
    TechniqueId,
    // Core types
    Account,
    CategoryStats,
    Technique,
    TechniqueIndex,
    // Enums
    AnxietySymptom,
    Category,
    CompetitiveLevel,
    Role,
    TimePreference,
};
