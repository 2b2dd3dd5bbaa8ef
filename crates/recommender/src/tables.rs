//! Static symptom tables.
//!
//! Each symptom maps to an ordered list of candidate technique slugs, and
//! each (symptom, slug) pair to the sentence shown to the athlete.

use catalog::AnxietySymptom;

/// Reason used when a (symptom, slug) pair has no dedicated sentence
pub const DEFAULT_MATCH_REASON: &str = "Matched to your profile";

/// Candidate technique slugs for a symptom, most relevant first
pub fn candidate_slugs(symptom: AnxietySymptom) -> &'static [&'static str] {
    match symptom {
        AnxietySymptom::Overthinking => &["box_breathing", "focus_word"],
        AnxietySymptom::PhysicalTension => &["body_scan", "deep_breathing"],
        AnxietySymptom::LossOfFocus => &["focus_word", "visualization"],
        AnxietySymptom::SelfDoubt => &["affirmations", "visualization"],
        AnxietySymptom::Rushing => &["box_breathing", "deep_breathing"],
        AnxietySymptom::NegativityAfterErrors => &["affirmations", "focus_word"],
    }
}

/// Why `slug` helps with `symptom`, if the pair has a dedicated sentence
pub fn match_reason(symptom: AnxietySymptom, slug: &str) -> Option<&'static str> {
    let reason = match (symptom, slug) {
        (AnxietySymptom::Overthinking, "box_breathing") => {
            "Calms racing thoughts with structured breathing"
        }
        (AnxietySymptom::Overthinking, "focus_word") => "Anchors your mind on a single focal point",
        (AnxietySymptom::PhysicalTension, "body_scan") => {
            "Releases tension by scanning and relaxing each muscle group"
        }
        (AnxietySymptom::PhysicalTension, "deep_breathing") => {
            "Activates your body's relaxation response"
        }
        (AnxietySymptom::LossOfFocus, "focus_word") => "Creates a mental anchor to keep you present",
        (AnxietySymptom::LossOfFocus, "visualization") => {
            "Directs your attention to specific game scenarios"
        }
        (AnxietySymptom::SelfDoubt, "affirmations") => "Replaces self-doubt with confident self-talk",
        (AnxietySymptom::SelfDoubt, "visualization") => {
            "Builds confidence by rehearsing peak performance"
        }
        (AnxietySymptom::Rushing, "box_breathing") => {
            "Slows down your pace with structured 4-count rhythms"
        }
        (AnxietySymptom::Rushing, "deep_breathing") => {
            "Brings your heart rate down before competition"
        }
        (AnxietySymptom::NegativityAfterErrors, "affirmations") => {
            "Builds a positive mindset to bounce back from mistakes"
        }
        (AnxietySymptom::NegativityAfterErrors, "focus_word") => {
            "Gives you a reset word to refocus after errors"
        }
        _ => return None,
    };
    Some(reason)
}
