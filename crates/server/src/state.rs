use std::sync::Arc;

use catalog::Dataset;
use store::{IdentityProvider, TokenDirectory};

use crate::orchestrator::RoutineOrchestrator;

/// Shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Resolves bearer tokens to accounts
    pub identity: Arc<dyn IdentityProvider>,
    pub orchestrator: Arc<RoutineOrchestrator>,
}

impl AppState {
    pub fn new(identity: Arc<dyn IdentityProvider>, orchestrator: RoutineOrchestrator) -> Self {
        Self {
            identity,
            orchestrator: Arc::new(orchestrator),
        }
    }

    /// In-memory stores and token directory seeded from `dataset`
    pub fn in_memory(dataset: &Dataset) -> Self {
        Self::new(
            Arc::new(TokenDirectory::new(dataset.accounts.iter().cloned())),
            RoutineOrchestrator::in_memory(dataset),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("identity", &"Arc<dyn IdentityProvider>")
            .field("orchestrator", &"Arc<RoutineOrchestrator>")
            .finish()
    }
}
