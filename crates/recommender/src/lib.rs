//! Rule-based technique recommender.
//!
//! This crate provides:
//! - Static symptom → technique and (symptom, technique) → reason tables
//! - `ScoreBoard` for order-preserving co-occurrence scoring
//! - `Filter` trait and `FilterPipeline` for narrowing the ranked list
//! - `TimeBudgetFilter`, the greedy fit into the athlete's minute budget
//! - `recommend`, the single entry point tying it together
//!
//! ## Example Usage
//! ```ignore
//! use catalog::AnxietySymptom;
//! use recommender::recommend;
//!
//! let picks = recommend(
//!     &[AnxietySymptom::Overthinking, AnxietySymptom::Rushing],
//!     "5min",
//!     &catalog,
//! )?;
//! for pick in &picks {
//!     println!("{}: {}", pick.technique.name, pick.match_reason);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod scoreboard;
pub mod tables;
pub mod traits;
pub mod types;

// Re-export main types
pub use engine::{
    Recommender, parse_symptoms, parse_time_preference, recommend, recommend_with_budget,
    total_minutes,
};
pub use error::{RecommendError, Result};
pub use filter_pipeline::FilterPipeline;
pub use scoreboard::{ScoreBoard, SlugScore};
pub use tables::DEFAULT_MATCH_REASON;
pub use traits::Filter;
pub use types::{Candidate, RecommendationContext, RecommendedTechnique};
