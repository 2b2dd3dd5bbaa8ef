//! Types flowing through the recommendation pipeline.

use catalog::{AnxietySymptom, Technique, TimePreference};
use serde::{Deserialize, Serialize};

/// What the athlete told us: their symptoms and how much time they have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationContext {
    /// Symptoms in the order the caller supplied them
    pub symptoms: Vec<AnxietySymptom>,
    pub time_preference: TimePreference,
}

impl RecommendationContext {
    pub fn new(symptoms: Vec<AnxietySymptom>, time_preference: TimePreference) -> Self {
        Self {
            symptoms,
            time_preference,
        }
    }

    /// Minute budget for the whole routine
    pub fn ceiling_minutes(&self) -> u32 {
        self.time_preference.ceiling_minutes()
    }
}

/// A catalog technique that scored against the athlete's symptoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub technique: Technique,
    /// Number of reported symptoms that point at this technique
    pub score: u32,
    pub match_reason: String,
}

impl Candidate {
    pub fn new(technique: Technique, score: u32, match_reason: impl Into<String>) -> Self {
        Self {
            technique,
            score,
            match_reason: match_reason.into(),
        }
    }
}

/// Final output: the technique plus the sentence explaining the pick.
///
/// Serializes flat, i.e. the technique's fields followed by `match_reason`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedTechnique {
    #[serde(flatten)]
    pub technique: Technique,
    pub match_reason: String,
}

impl From<Candidate> for RecommendedTechnique {
    fn from(candidate: Candidate) -> Self {
        Self {
            technique: candidate.technique,
            match_reason: candidate.match_reason,
        }
    }
}
