//! Route table. Every endpoint lives under `/api` and requires a bearer token.

mod home;
mod onboarding;
mod routines;
mod techniques;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/onboarding", post(onboarding::submit))
        .route("/techniques", get(techniques::list))
        .route("/routines", get(routines::list).post(routines::create))
        .route("/home", get(home::summary))
}
