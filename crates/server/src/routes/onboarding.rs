use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::auth::CurrentAccount;
use crate::error::{ApiResult, Envelope};
use crate::orchestrator::{OnboardingOutcome, OnboardingRequest};
use crate::state::AppState;

/// POST /api/onboarding
pub async fn submit(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    body: Result<Json<OnboardingRequest>, JsonRejection>,
) -> ApiResult<Envelope<OnboardingOutcome>> {
    let Json(request) = body?;
    let outcome = state.orchestrator.onboard(account.id, request).await?;
    Ok(Envelope::ok(outcome))
}
