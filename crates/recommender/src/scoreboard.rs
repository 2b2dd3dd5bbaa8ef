//! Symptom co-occurrence scoring.
//!
//! Every symptom votes once for each of its candidate slugs. A slug keeps
//! the reason of the first symptom that voted for it, and slugs are kept in
//! first-vote order so that ranking ties resolve the same way every time.

use crate::tables::{self, DEFAULT_MATCH_REASON};
use catalog::AnxietySymptom;
use std::collections::HashMap;
use tracing::debug;

/// One slug's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugScore {
    pub slug: &'static str,
    pub score: u32,
    pub match_reason: &'static str,
}

/// Order-preserving score and reason accumulator.
///
/// A `HashMap` alone would lose first-seen order, so entries live in a `Vec`
/// and the map only points into it.
#[derive(Debug, Default, Clone)]
pub struct ScoreBoard {
    entries: Vec<SlugScore>,
    positions: HashMap<&'static str, usize>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every symptom in caller order
    pub fn from_symptoms(symptoms: &[AnxietySymptom]) -> Self {
        let mut board = Self::new();
        for &symptom in symptoms {
            board.record(symptom);
        }
        debug!(
            "Scored {} candidate slugs from {} symptoms",
            board.len(),
            symptoms.len()
        );
        board
    }

    /// Add one vote from `symptom` to each of its candidate slugs
    pub fn record(&mut self, symptom: AnxietySymptom) {
        for &slug in tables::candidate_slugs(symptom) {
            match self.positions.get(slug) {
                Some(&pos) => self.entries[pos].score += 1,
                None => {
                    let match_reason =
                        tables::match_reason(symptom, slug).unwrap_or(DEFAULT_MATCH_REASON);
                    self.positions.insert(slug, self.entries.len());
                    self.entries.push(SlugScore {
                        slug,
                        score: 1,
                        match_reason,
                    });
                }
            }
        }
    }

    pub fn get(&self, slug: &str) -> Option<&SlugScore> {
        self.positions.get(slug).map(|&pos| &self.entries[pos])
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[SlugScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending score; ties keep first-seen order.
    pub fn into_ranked(self) -> Vec<SlugScore> {
        let mut ranked = self.entries;
        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_symptoms() {
        let board = ScoreBoard::from_symptoms(&[]);
        assert!(board.is_empty());
        assert!(board.into_ranked().is_empty());
    }

    #[test]
    fn test_co_occurrence_counts() {
        let board = ScoreBoard::from_symptoms(&[
            AnxietySymptom::Overthinking,
            AnxietySymptom::Rushing,
        ]);

        assert_eq!(board.get("box_breathing").unwrap().score, 2);
        assert_eq!(board.get("focus_word").unwrap().score, 1);
        assert_eq!(board.get("deep_breathing").unwrap().score, 1);
        assert!(board.get("body_scan").is_none());
    }

    #[test]
    fn test_first_reason_sticks() {
        let board = ScoreBoard::from_symptoms(&[
            AnxietySymptom::Rushing,
            AnxietySymptom::Overthinking,
        ]);
        assert_eq!(
            board.get("box_breathing").unwrap().match_reason,
            "Slows down your pace with structured 4-count rhythms"
        );

        let board = ScoreBoard::from_symptoms(&[
            AnxietySymptom::Overthinking,
            AnxietySymptom::Rushing,
        ]);
        assert_eq!(
            board.get("box_breathing").unwrap().match_reason,
            "Calms racing thoughts with structured breathing"
        );
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let ranked = ScoreBoard::from_symptoms(&[
            AnxietySymptom::Overthinking,
            AnxietySymptom::Rushing,
        ])
        .into_ranked();

        let slugs: Vec<_> = ranked.iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["box_breathing", "focus_word", "deep_breathing"]);
    }

    #[test]
    fn test_repeated_symptom_counts_twice() {
        let board = ScoreBoard::from_symptoms(&[
            AnxietySymptom::SelfDoubt,
            AnxietySymptom::SelfDoubt,
        ]);
        assert_eq!(board.get("affirmations").unwrap().score, 2);
        assert_eq!(board.len(), 2);
    }
}
