use axum::extract::State;

use crate::auth::CurrentAccount;
use crate::error::{ApiResult, Envelope};
use crate::orchestrator::HomeSummary;
use crate::state::AppState;

/// GET /api/home
pub async fn summary(
    State(state): State<AppState>,
    CurrentAccount(account): CurrentAccount,
) -> ApiResult<Envelope<HomeSummary>> {
    Ok(Envelope::ok(state.orchestrator.home(&account).await?))
}
