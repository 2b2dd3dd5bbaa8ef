//! # Routine Orchestrator
//!
//! Business flow behind the HTTP handlers:
//! - onboarding: validate answers → upsert profile → fetch catalog → recommend
//! - routines: validate → enforce the per-athlete limit → insert routine → insert steps
//! - home: account + profile + routines, summarised around the active routine
//!
//! Handlers only extract and wrap; every decision lives here so it can be
//! exercised without a router.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use catalog::{Account, AthleteId, CompetitiveLevel, Dataset, Role, Technique};
use recommender::{RecommendationContext, RecommendedTechnique, Recommender};
use store::{
    AthleteProfile, MemoryStore, NewRoutine, NewRoutineStep, ProfileStore, Routine, RoutineId,
    RoutineSource, RoutineStore, RoutineWithSteps, TechniqueStore,
};

use crate::error::{ApiError, ApiResult};

/// Routines one athlete may keep
pub const MAX_ROUTINES: usize = 5;

// ============================================================================
// Requests and responses
// ============================================================================

/// Onboarding answers as submitted; every field is checked by `onboard`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingRequest {
    pub sport: Option<String>,
    pub competitive_level: Option<String>,
    pub anxiety_symptoms: Option<Vec<String>>,
    pub time_preference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingOutcome {
    pub profile_saved: bool,
    pub recommended: Vec<RecommendedTechnique>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRoutineRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub source: RoutineSource,
    #[serde(default)]
    pub steps: Vec<NewRoutineStep>,
}

/// What the athlete home screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSummary {
    pub display_name: String,
    pub role: Role,
    pub sport: Option<String>,
    pub onboarding_complete: bool,
    pub routines: Vec<RoutineWithSteps>,
    pub active_routine_id: Option<RoutineId>,
    pub active_routine_minutes: u32,
}

// ============================================================================
// Orchestrator
// ============================================================================

#[derive(Clone)]
pub struct RoutineOrchestrator {
    techniques: Arc<dyn TechniqueStore>,
    profiles: Arc<dyn ProfileStore>,
    routines: Arc<dyn RoutineStore>,
    recommender: Arc<Recommender>,
}

impl RoutineOrchestrator {
    pub fn new(
        techniques: Arc<dyn TechniqueStore>,
        profiles: Arc<dyn ProfileStore>,
        routines: Arc<dyn RoutineStore>,
    ) -> Self {
        Self {
            techniques,
            profiles,
            routines,
            recommender: Arc::new(Recommender::new()),
        }
    }

    /// All three stores served by one `MemoryStore` seeded from `dataset`
    pub fn in_memory(dataset: &Dataset) -> Self {
        let store = Arc::new(MemoryStore::from_dataset(dataset));
        Self::new(store.clone(), store.clone(), store)
    }

    /// Save onboarding answers and recommend a first routine.
    #[instrument(skip_all, fields(athlete_id = %athlete_id))]
    pub async fn onboard(
        &self,
        athlete_id: AthleteId,
        request: OnboardingRequest,
    ) -> ApiResult<OnboardingOutcome> {
        let start_time = Instant::now();

        let (sport, level, symptoms, time) = match (
            non_empty(request.sport),
            non_empty(request.competitive_level),
            request.anxiety_symptoms.filter(|s| !s.is_empty()),
            non_empty(request.time_preference),
        ) {
            (Some(sport), Some(level), Some(symptoms), Some(time)) => {
                (sport, level, symptoms, time)
            }
            _ => return Err(ApiError::Validation("All fields are required".to_string())),
        };

        let competitive_level = CompetitiveLevel::from_str(&level)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        let time_preference = recommender::parse_time_preference(&time)?;
        let (anxiety_symptoms, unknown) = recommender::parse_symptoms(&symptoms);
        if !unknown.is_empty() {
            warn!("Ignoring {} unrecognised symptom tags", unknown.len());
        }

        self.profiles
            .upsert_profile(AthleteProfile {
                athlete_id,
                sport,
                competitive_level,
                anxiety_symptoms: anxiety_symptoms.clone(),
                time_preference,
                onboarding_complete: true,
                updated_at: Utc::now(),
            })
            .await?;
        debug!("Profile saved");

        let catalog = self.techniques.list_techniques().await?;
        let context = RecommendationContext::new(anxiety_symptoms, time_preference);
        let recommended = self.recommender.recommend(&context, &catalog);

        info!(
            "Onboarded athlete with {} recommendations in {:?}",
            recommended.len(),
            start_time.elapsed()
        );

        Ok(OnboardingOutcome {
            profile_saved: true,
            recommended,
        })
    }

    pub async fn list_techniques(&self) -> ApiResult<Vec<Technique>> {
        Ok(self.techniques.list_techniques().await?)
    }

    pub async fn list_routines(&self, athlete_id: AthleteId) -> ApiResult<Vec<RoutineWithSteps>> {
        Ok(self.routines.list_routines(athlete_id).await?)
    }

    /// Create a routine with its steps.
    ///
    /// The limit check and the insert are separate store calls, so two
    /// concurrent creates can both pass the check.
    #[instrument(skip_all, fields(athlete_id = %athlete_id))]
    pub async fn create_routine(
        &self,
        athlete_id: AthleteId,
        request: CreateRoutineRequest,
    ) -> ApiResult<Routine> {
        let name = match non_empty(request.name) {
            Some(name) if !request.steps.is_empty() => name,
            _ => {
                return Err(ApiError::Validation(
                    "Name and at least one step required".to_string(),
                ));
            }
        };

        let existing = self.routines.count_routines(athlete_id).await?;
        if existing >= MAX_ROUTINES {
            return Err(ApiError::LimitExceeded(format!(
                "Maximum {} routines allowed",
                MAX_ROUTINES
            )));
        }

        let routine = self
            .routines
            .insert_routine(NewRoutine {
                athlete_id,
                name,
                source: request.source,
            })
            .await?;
        let steps = self.routines.insert_steps(routine.id, request.steps).await?;

        info!(
            "Created routine {} with {} steps ({} of {})",
            routine.id,
            steps.len(),
            existing + 1,
            MAX_ROUTINES
        );
        Ok(routine)
    }

    pub async fn home(&self, account: &Account) -> ApiResult<HomeSummary> {
        let profile = self.profiles.get_profile(account.id).await?;
        let routines = self.routines.list_routines(account.id).await?;

        let active = routines.iter().find(|r| r.routine.is_active);
        let active_routine_id = active.map(|r| r.routine.id);
        let active_routine_minutes = active.map(|r| r.total_minutes()).unwrap_or(0);

        Ok(HomeSummary {
            display_name: account.display_name.clone(),
            role: account.role,
            sport: profile.as_ref().map(|p| p.sport.clone()),
            onboarding_complete: profile.is_some_and(|p| p.onboarding_complete),
            routines,
            active_routine_id,
            active_routine_minutes,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
