//! Table operations the service needs from its datastore.
//!
//! Each trait mirrors one table. Implementations must be safe to share
//! across request tasks.

use async_trait::async_trait;
use catalog::{Account, AthleteId, Technique};

use crate::error::Result;
use crate::models::{
    AthleteProfile, NewRoutine, NewRoutineStep, Routine, RoutineId, RoutineStep, RoutineWithSteps,
};

/// Read access to the technique catalog
#[async_trait]
pub trait TechniqueStore: Send + Sync {
    /// All techniques ordered by category
    async fn list_techniques(&self) -> Result<Vec<Technique>>;
}

/// Athlete onboarding profiles, keyed by athlete id
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert the profile, or replace the existing one for the same athlete
    async fn upsert_profile(&self, profile: AthleteProfile) -> Result<AthleteProfile>;

    async fn get_profile(&self, athlete_id: AthleteId) -> Result<Option<AthleteProfile>>;
}

/// Routines and their ordered steps
#[async_trait]
pub trait RoutineStore: Send + Sync {
    async fn count_routines(&self, athlete_id: AthleteId) -> Result<usize>;

    async fn insert_routine(&self, routine: NewRoutine) -> Result<Routine>;

    async fn insert_steps(
        &self,
        routine_id: RoutineId,
        steps: Vec<NewRoutineStep>,
    ) -> Result<Vec<RoutineStep>>;

    /// The athlete's routines, newest first, each with steps joined to techniques
    async fn list_routines(&self, athlete_id: AthleteId) -> Result<Vec<RoutineWithSteps>>;
}

/// Resolves bearer tokens to accounts
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means the token is not recognised
    async fn authenticate(&self, token: &str) -> Result<Option<Account>>;
}
