//! Datastore and identity collaborators.
//!
//! The service never talks to a database directly. It goes through the
//! table-shaped traits in `repository`, which a managed backend or the
//! bundled `MemoryStore` implement:
//! - `TechniqueStore`: read the technique catalog
//! - `ProfileStore`: upsert and read onboarding profiles
//! - `RoutineStore`: count, insert and list routines with their steps
//! - `IdentityProvider`: turn a bearer token into an account

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, TokenDirectory};
pub use models::{
    AthleteProfile, NewRoutine, NewRoutineStep, Routine, RoutineId, RoutineSource, RoutineStep,
    RoutineStepDetail, RoutineStepId, RoutineWithSteps,
};
pub use repository::{IdentityProvider, ProfileStore, RoutineStore, TechniqueStore};
