//! Filter that fits the ranked techniques into the athlete's time budget.

use crate::traits::Filter;
use crate::types::{Candidate, RecommendationContext};

/// Greedy fit by rank.
///
/// ## Algorithm
/// Walk the candidates in rank order and keep one if the running total plus
/// its duration stays within the ceiling. A candidate that does not fit is
/// skipped and the walk goes on, so a shorter technique further down can
/// still be kept. This is not an optimal packing.
pub struct TimeBudgetFilter;

impl Filter for TimeBudgetFilter {
    fn name(&self) -> &str {
        "TimeBudgetFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &RecommendationContext) -> Vec<Candidate> {
        let ceiling = context.ceiling_minutes();
        let mut total = 0u32;

        candidates
            .into_iter()
            .filter(|candidate| {
                let next = total.saturating_add(candidate.technique.duration_minutes);
                if next <= ceiling {
                    total = next;
                    true
                } else {
                    false
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{AnxietySymptom, Category, Technique, TimePreference};

    fn candidate(id: u32, minutes: u32) -> Candidate {
        Candidate::new(
            Technique {
                id,
                slug: format!("t{}", id),
                name: format!("Technique {}", id),
                category: Category::Breathing,
                instruction: String::new(),
                duration_minutes: minutes,
            },
            1,
            "reason",
        )
    }

    fn context(pref: TimePreference) -> RecommendationContext {
        RecommendationContext::new(vec![AnxietySymptom::Overthinking], pref)
    }

    fn ids(candidates: &[Candidate]) -> Vec<u32> {
        candidates.iter().map(|c| c.technique.id).collect()
    }

    #[test]
    fn test_skips_but_keeps_walking() {
        let kept = TimeBudgetFilter.apply(
            vec![candidate(1, 3), candidate(2, 4), candidate(3, 2)],
            &context(TimePreference::FiveMinutes),
        );
        assert_eq!(ids(&kept), vec![1, 3]);
    }

    #[test]
    fn test_oversized_first_does_not_block() {
        let kept = TimeBudgetFilter.apply(
            vec![candidate(1, 5), candidate(2, 1), candidate(3, 1)],
            &context(TimePreference::TwoMinutes),
        );
        assert_eq!(ids(&kept), vec![2, 3]);
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        let kept = TimeBudgetFilter.apply(
            vec![candidate(1, 5), candidate(2, 5)],
            &context(TimePreference::TenMinutes),
        );
        assert_eq!(ids(&kept), vec![1, 2]);
    }

    #[test]
    fn test_zero_minute_techniques_always_fit() {
        let kept = TimeBudgetFilter.apply(
            vec![candidate(1, 2), candidate(2, 0)],
            &context(TimePreference::TwoMinutes),
        );
        assert_eq!(ids(&kept), vec![1, 2]);
    }

    #[test]
    fn test_nothing_fits() {
        let kept = TimeBudgetFilter.apply(
            vec![candidate(1, 3), candidate(2, 4)],
            &context(TimePreference::TwoMinutes),
        );
        assert!(kept.is_empty());
    }
}
