//! Core traits for the filtering pipeline.

use crate::types::{Candidate, RecommendationContext};

/// A stage that narrows the ranked candidate list.
///
/// Filters receive candidates in rank order and must keep the survivors in
/// that order. They are pure: no I/O, no shared state.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging)
    fn name(&self) -> &str;

    /// Apply this filter to the ranked candidates.
    fn apply(&self, candidates: Vec<Candidate>, context: &RecommendationContext) -> Vec<Candidate>;
}
