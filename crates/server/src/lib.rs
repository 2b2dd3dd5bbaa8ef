//! HTTP service for the Steady athlete app.
//!
//! This crate wires the catalog, recommender and store crates behind an
//! axum router:
//! - `orchestrator`: onboarding, routine and home-screen flows
//! - `auth`: bearer-token extractor
//! - `error`: `{ data, error }` envelope and error codes
//! - `routes`: thin handlers mounted under `/api`

pub mod auth;
pub mod error;
pub mod orchestrator;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult, Envelope, ErrorCode};
pub use orchestrator::{
    CreateRoutineRequest, HomeSummary, MAX_ROUTINES, OnboardingOutcome, OnboardingRequest,
    RoutineOrchestrator,
};
pub use state::AppState;

/// Full application router with request tracing.
///
/// A panicking handler is answered with the `INTERNAL_ERROR` envelope.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
