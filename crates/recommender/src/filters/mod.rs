//! Filter implementations for the candidate pipeline.

pub mod time_budget;

pub use time_budget::TimeBudgetFilter;
