//! # Recommendation Engine
//!
//! Turns reported symptoms and a time budget into a ranked, time-boxed list
//! of techniques:
//! 1. Index the supplied catalog by slug (last duplicate wins)
//! 2. Score slugs by how many symptoms point at them
//! 3. Rank by score, ties in first-seen order
//! 4. Drop slugs the catalog does not have
//! 5. Run the filter pipeline (greedy fit into the budget)
//!
//! Pure and synchronous: the catalog is only read, nothing is cached between
//! calls.

use std::collections::HashMap;

use catalog::{AnxietySymptom, Technique, TimePreference};
use tracing::{debug, instrument, warn};

use crate::error::{RecommendError, Result};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::TimeBudgetFilter;
use crate::scoreboard::{ScoreBoard, SlugScore};
use crate::types::{Candidate, RecommendationContext, RecommendedTechnique};

/// Runs the scoring and filtering stages over a caller-supplied catalog.
pub struct Recommender {
    pipeline: FilterPipeline,
}

impl Recommender {
    /// Recommender with the standard pipeline (time budget only)
    pub fn new() -> Self {
        Self::with_pipeline(FilterPipeline::new().add_filter(TimeBudgetFilter))
    }

    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Recommend techniques for one athlete.
    ///
    /// An empty result means nothing fit; it is not an error.
    #[instrument(skip_all, fields(symptoms = context.symptoms.len(), budget = %context.time_preference))]
    pub fn recommend(
        &self,
        context: &RecommendationContext,
        catalog: &[Technique],
    ) -> Vec<RecommendedTechnique> {
        let by_slug = index_by_slug(catalog);

        let ranked = ScoreBoard::from_symptoms(&context.symptoms).into_ranked();
        let candidates = resolve(ranked, &by_slug);
        debug!("{} ranked candidates present in catalog", candidates.len());

        let selected: Vec<RecommendedTechnique> = self
            .pipeline
            .apply(candidates, context)
            .into_iter()
            .map(RecommendedTechnique::from)
            .collect();

        debug!(
            "Selected {} techniques ({} of {} minutes)",
            selected.len(),
            total_minutes(&selected),
            context.ceiling_minutes()
        );
        selected
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend techniques from a raw time preference value.
///
/// Fails with `InvalidArgument` when `time_preference` is not one of
/// `2min`, `5min` or `10min`.
pub fn recommend(
    symptoms: &[AnxietySymptom],
    time_preference: &str,
    catalog: &[Technique],
) -> Result<Vec<RecommendedTechnique>> {
    let time_preference = parse_time_preference(time_preference)?;
    Ok(recommend_with_budget(symptoms, time_preference, catalog))
}

/// Recommend techniques for an already-validated time preference.
pub fn recommend_with_budget(
    symptoms: &[AnxietySymptom],
    time_preference: TimePreference,
    catalog: &[Technique],
) -> Vec<RecommendedTechnique> {
    let context = RecommendationContext::new(symptoms.to_vec(), time_preference);
    Recommender::new().recommend(&context, catalog)
}

/// Parse a time preference, mapping failure to `InvalidArgument`
pub fn parse_time_preference(value: &str) -> Result<TimePreference> {
    value
        .parse()
        .map_err(|_| RecommendError::InvalidArgument {
            field: "time_preference",
            value: value.to_string(),
        })
}

/// Parse symptom tags leniently.
///
/// Unknown tags are returned separately; they simply contribute no
/// candidates. Known tags keep their input order.
pub fn parse_symptoms<S: AsRef<str>>(values: &[S]) -> (Vec<AnxietySymptom>, Vec<String>) {
    let mut symptoms = Vec::with_capacity(values.len());
    let mut unknown = Vec::new();

    for value in values {
        match value.as_ref().parse::<AnxietySymptom>() {
            Ok(symptom) => symptoms.push(symptom),
            Err(_) => {
                warn!("Ignoring unknown anxiety symptom {:?}", value.as_ref());
                unknown.push(value.as_ref().to_string());
            }
        }
    }
    (symptoms, unknown)
}

/// Sum of durations, for logs and summaries
pub fn total_minutes(techniques: &[RecommendedTechnique]) -> u32 {
    techniques
        .iter()
        .map(|t| t.technique.duration_minutes)
        .sum()
}

fn index_by_slug(catalog: &[Technique]) -> HashMap<&str, &Technique> {
    let mut by_slug = HashMap::with_capacity(catalog.len());
    for technique in catalog {
        // later entries overwrite earlier ones
        by_slug.insert(technique.slug.as_str(), technique);
    }
    by_slug
}

/// Attach catalog records to ranked slugs, dropping slugs the catalog lacks
fn resolve(ranked: Vec<SlugScore>, by_slug: &HashMap<&str, &Technique>) -> Vec<Candidate> {
    ranked
        .into_iter()
        .filter_map(|entry| {
            let technique = by_slug.get(entry.slug)?;
            Some(Candidate::new(
                (*technique).clone(),
                entry.score,
                entry.match_reason,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Category;

    fn technique(id: u32, slug: &str, minutes: u32) -> Technique {
        Technique {
            id,
            slug: slug.to_string(),
            name: slug.replace('_', " "),
            category: Category::Breathing,
            instruction: format!("Do {}", slug),
            duration_minutes: minutes,
        }
    }

    fn slugs(result: &[RecommendedTechnique]) -> Vec<&str> {
        result.iter().map(|r| r.technique.slug.as_str()).collect()
    }

    #[test]
    fn test_single_symptom_tight_budget() {
        let catalog = vec![technique(1, "box_breathing", 2), technique(2, "focus_word", 3)];

        let result = recommend(&[AnxietySymptom::Overthinking], "2min", &catalog).unwrap();

        assert_eq!(slugs(&result), vec!["box_breathing"]);
        assert_eq!(
            result[0].match_reason,
            "Calms racing thoughts with structured breathing"
        );
    }

    #[test]
    fn test_shared_slug_ranks_first_and_budget_cuts_tail() {
        let catalog = vec![
            technique(1, "box_breathing", 2),
            technique(2, "focus_word", 2),
            technique(3, "deep_breathing", 3),
        ];

        let result = recommend(
            &[AnxietySymptom::Overthinking, AnxietySymptom::Rushing],
            "5min",
            &catalog,
        )
        .unwrap();

        assert_eq!(slugs(&result), vec!["box_breathing", "focus_word"]);
        assert_eq!(total_minutes(&result), 4);
    }

    #[test]
    fn test_no_fit_is_empty_not_error() {
        let catalog = vec![technique(1, "body_scan", 5)];

        let result = recommend(&[AnxietySymptom::PhysicalTension], "2min", &catalog).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_time_preference_is_invalid_argument() {
        let catalog = vec![technique(1, "box_breathing", 2)];

        for bad in ["", "3min", "10", "TWO_MIN"] {
            let err = recommend(&[AnxietySymptom::Overthinking], bad, &catalog).unwrap_err();
            assert_eq!(
                err,
                RecommendError::InvalidArgument {
                    field: "time_preference",
                    value: bad.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_empty_symptoms_and_empty_catalog() {
        let catalog = vec![technique(1, "box_breathing", 2)];
        assert!(recommend(&[], "10min", &catalog).unwrap().is_empty());
        assert!(
            recommend(&[AnxietySymptom::Overthinking], "10min", &[])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_slugs_missing_from_catalog_are_skipped() {
        // visualization and affirmations are candidates but not in the catalog
        let catalog = vec![technique(1, "focus_word", 1)];

        let result = recommend(
            &[AnxietySymptom::SelfDoubt, AnxietySymptom::LossOfFocus],
            "10min",
            &catalog,
        )
        .unwrap();
        assert_eq!(slugs(&result), vec!["focus_word"]);
        assert_eq!(
            result[0].match_reason,
            "Creates a mental anchor to keep you present"
        );
    }

    #[test]
    fn test_duplicate_slug_last_write_wins() {
        let catalog = vec![technique(1, "box_breathing", 9), technique(2, "box_breathing", 2)];

        let result = recommend(&[AnxietySymptom::Overthinking], "2min", &catalog).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].technique.id, 2);
    }

    #[test]
    fn test_parse_symptoms_keeps_order_and_reports_unknown() {
        let (symptoms, unknown) = parse_symptoms(&["rushing", "stage_fright", "self_doubt"]);
        assert_eq!(
            symptoms,
            vec![AnxietySymptom::Rushing, AnxietySymptom::SelfDoubt]
        );
        assert_eq!(unknown, vec!["stage_fright".to_string()]);
    }

    #[test]
    fn test_recommended_technique_serializes_flat() {
        let catalog = vec![technique(1, "box_breathing", 2)];
        let result = recommend(&[AnxietySymptom::Overthinking], "2min", &catalog).unwrap();

        let json = serde_json::to_value(&result[0]).unwrap();
        assert_eq!(json["slug"], "box_breathing");
        assert_eq!(json["duration_minutes"], 2);
        assert_eq!(
            json["match_reason"],
            "Calms racing thoughts with structured breathing"
        );
    }
}
