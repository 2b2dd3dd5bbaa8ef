use axum::extract::State;

use catalog::Technique;

use crate::auth::CurrentAccount;
use crate::error::{ApiResult, Envelope};
use crate::state::AppState;

/// GET /api/techniques
pub async fn list(
    State(state): State<AppState>,
    _account: CurrentAccount,
) -> ApiResult<Envelope<Vec<Technique>>> {
    Ok(Envelope::ok(state.orchestrator.list_techniques().await?))
}
