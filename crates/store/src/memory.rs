//! In-process datastore.
//!
//! Serves the technique catalog from a `TechniqueIndex` and keeps profiles,
//! routines and steps in tables behind a single `RwLock`. Foreign keys are
//! checked the way the managed store checks them, so callers see the same
//! failures in development as in production.

use std::collections::HashMap;

use async_trait::async_trait;
use catalog::{Account, AthleteId, Dataset, Technique, TechniqueIndex};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::*;
use crate::repository::{IdentityProvider, ProfileStore, RoutineStore, TechniqueStore};

#[derive(Debug, Default)]
struct Tables {
    profiles: HashMap<AthleteId, AthleteProfile>,
    /// Insertion order
    routines: Vec<Routine>,
    steps: Vec<RoutineStep>,
}

/// Datastore backed by process memory
#[derive(Debug)]
pub struct MemoryStore {
    techniques: TechniqueIndex,
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(techniques: TechniqueIndex) -> Self {
        Self {
            techniques,
            tables: RwLock::new(Tables::default()),
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        info!(
            "Seeding in-memory store with {} techniques",
            dataset.techniques.len()
        );
        Self::new(dataset.techniques.clone())
    }
}

#[async_trait]
impl TechniqueStore for MemoryStore {
    async fn list_techniques(&self) -> Result<Vec<Technique>> {
        Ok(self.techniques.techniques())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn upsert_profile(&self, profile: AthleteProfile) -> Result<AthleteProfile> {
        let mut tables = self.tables.write().await;
        let replaced = tables
            .profiles
            .insert(profile.athlete_id, profile.clone())
            .is_some();
        debug!(
            athlete_id = %profile.athlete_id,
            replaced, "Upserted athlete profile"
        );
        Ok(profile)
    }

    async fn get_profile(&self, athlete_id: AthleteId) -> Result<Option<AthleteProfile>> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.get(&athlete_id).cloned())
    }
}

#[async_trait]
impl RoutineStore for MemoryStore {
    async fn count_routines(&self, athlete_id: AthleteId) -> Result<usize> {
        let tables = self.tables.read().await;
        Ok(tables
            .routines
            .iter()
            .filter(|r| r.athlete_id == athlete_id)
            .count())
    }

    async fn insert_routine(&self, routine: NewRoutine) -> Result<Routine> {
        let mut tables = self.tables.write().await;

        // An athlete's first routine becomes the active one
        let is_active = !tables
            .routines
            .iter()
            .any(|r| r.athlete_id == routine.athlete_id);

        let row = Routine {
            id: Uuid::new_v4(),
            athlete_id: routine.athlete_id,
            name: routine.name,
            source: routine.source,
            is_active,
            created_at: Utc::now(),
        };
        tables.routines.push(row.clone());
        debug!(routine_id = %row.id, athlete_id = %row.athlete_id, "Inserted routine");
        Ok(row)
    }

    async fn insert_steps(
        &self,
        routine_id: RoutineId,
        steps: Vec<NewRoutineStep>,
    ) -> Result<Vec<RoutineStep>> {
        let mut tables = self.tables.write().await;

        if !tables.routines.iter().any(|r| r.id == routine_id) {
            return Err(StoreError::ForeignKey {
                table: "routine_steps",
                key: format!("routine_id={}", routine_id),
            });
        }
        // All-or-nothing: check every step before writing any
        if let Some(bad) = steps
            .iter()
            .find(|s| !self.techniques.contains(s.technique_id))
        {
            return Err(StoreError::ForeignKey {
                table: "routine_steps",
                key: format!("technique_id={}", bad.technique_id),
            });
        }

        let rows: Vec<RoutineStep> = steps
            .into_iter()
            .map(|s| RoutineStep {
                id: Uuid::new_v4(),
                routine_id,
                technique_id: s.technique_id,
                step_order: s.step_order,
            })
            .collect();
        tables.steps.extend(rows.iter().cloned());
        Ok(rows)
    }

    async fn list_routines(&self, athlete_id: AthleteId) -> Result<Vec<RoutineWithSteps>> {
        let tables = self.tables.read().await;

        let mut routines: Vec<&Routine> = tables
            .routines
            .iter()
            .rev()
            .filter(|r| r.athlete_id == athlete_id)
            .collect();
        // stable, so equal timestamps stay newest-inserted first
        routines.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let result = routines
            .into_iter()
            .map(|routine| {
                let mut routine_steps: Vec<RoutineStepDetail> = tables
                    .steps
                    .iter()
                    .filter(|s| s.routine_id == routine.id)
                    .map(|s| RoutineStepDetail {
                        step: s.clone(),
                        technique: self.techniques.get(s.technique_id).cloned(),
                    })
                    .collect();
                routine_steps.sort_by_key(|s| s.step.step_order);

                RoutineWithSteps {
                    routine: routine.clone(),
                    routine_steps,
                }
            })
            .collect();
        Ok(result)
    }
}

/// Identity provider backed by a fixed token → account table
#[derive(Debug, Clone, Default)]
pub struct TokenDirectory {
    accounts: HashMap<String, Account>,
}

impl TokenDirectory {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.token.clone(), a))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for TokenDirectory {
    async fn authenticate(&self, token: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(token).cloned())
    }
}
