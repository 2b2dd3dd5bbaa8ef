//! Bearer-token authentication.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::{debug, warn};

use catalog::Account;

use crate::error::ApiError;
use crate::state::AppState;

/// The signed-in account, resolved from `Authorization: Bearer <token>`.
///
/// Handlers that take this extractor reject anonymous requests with
/// `UNAUTHORIZED` before their body runs.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub Account);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::Unauthorized)?;

        match state.identity.authenticate(&token).await {
            Ok(Some(account)) => {
                debug!(account_id = %account.id, "Authenticated request");
                Ok(CurrentAccount(account))
            }
            Ok(None) => Err(ApiError::Unauthorized),
            Err(e) => {
                warn!("Identity provider failed: {}", e);
                Err(ApiError::Unauthorized)
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/home");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(
            bearer_token(&parts_with(Some("Bearer abc"))).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn rejects_missing_or_malformed_header() {
        assert_eq!(bearer_token(&parts_with(None)), None);
        assert_eq!(bearer_token(&parts_with(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer   "))), None);
    }
}
