use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use store::{Routine, RoutineWithSteps};

use crate::auth::CurrentAccount;
use crate::error::{ApiResult, Envelope};
use crate::orchestrator::CreateRoutineRequest;
use crate::state::AppState;

/// GET /api/routines
pub async fn list(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> ApiResult<Envelope<Vec<RoutineWithSteps>>> {
    let routines = state.orchestrator.list_routines(account.id).await?;
    Ok(Envelope::ok(routines))
}

/// POST /api/routines
pub async fn create(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
    body: Result<Json<CreateRoutineRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Envelope<Routine>)> {
    let Json(request) = body?;
    let routine = state.orchestrator.create_routine(account.id, request).await?;
    Ok((StatusCode::CREATED, Envelope::ok(routine)))
}
