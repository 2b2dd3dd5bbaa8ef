//! Rows stored on behalf of athletes.

use catalog::{AnxietySymptom, AthleteId, CompetitiveLevel, Technique, TechniqueId, TimePreference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RoutineId = Uuid;
pub type RoutineStepId = Uuid;

/// Onboarding answers, one row per athlete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub athlete_id: AthleteId,
    pub sport: String,
    pub competitive_level: CompetitiveLevel,
    pub anxiety_symptoms: Vec<AnxietySymptom>,
    pub time_preference: TimePreference,
    pub onboarding_complete: bool,
    pub updated_at: DateTime<Utc>,
}

/// Where a routine came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineSource {
    #[default]
    Custom,
    Recommended,
}

/// Insert payload for a routine; id, activity and timestamp are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoutine {
    pub athlete_id: AthleteId,
    pub name: String,
    pub source: RoutineSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub id: RoutineId,
    pub athlete_id: AthleteId,
    pub name: String,
    pub source: RoutineSource,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for one step of a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoutineStep {
    pub technique_id: TechniqueId,
    pub step_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    pub id: RoutineStepId,
    pub routine_id: RoutineId,
    pub technique_id: TechniqueId,
    pub step_order: u32,
}

/// A step joined to its technique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStepDetail {
    #[serde(flatten)]
    pub step: RoutineStep,
    #[serde(rename = "techniques")]
    pub technique: Option<Technique>,
}

/// A routine with its steps ordered by `step_order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineWithSteps {
    #[serde(flatten)]
    pub routine: Routine,
    pub routine_steps: Vec<RoutineStepDetail>,
}

impl RoutineWithSteps {
    /// Minutes needed to run every step; steps without a technique count as zero
    pub fn total_minutes(&self) -> u32 {
        self.routine_steps
            .iter()
            .filter_map(|s| s.technique.as_ref())
            .map(|t| t.duration_minutes)
            .sum()
    }
}
