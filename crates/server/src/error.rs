//! Response envelope and the error type every handler returns.
//!
//! Every body has the shape `{ "data": ..., "error": ... }` with exactly one
//! side populated. Failures carry a stable machine-readable `code` next to a
//! human message; store and internal detail is logged, never sent.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use recommender::RecommendError;
use store::StoreError;

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthorized,
    ValidationError,
    DbError,
    LimitExceeded,
    InternalError,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::ValidationError | ErrorCode::LimitExceeded => StatusCode::BAD_REQUEST,
            ErrorCode::DbError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: ErrorCode,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            data: None,
            error: Some(ErrorBody {
                message: message.into(),
                code,
            }),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// ============================================================================
// ApiError
// ============================================================================

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    LimitExceeded(String),

    /// Detail is for the log only
    #[error("Internal server error")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Unauthorized => ErrorCode::Unauthorized,
            ApiError::Validation(_) => ErrorCode::ValidationError,
            ApiError::Database(_) => ErrorCode::DbError,
            ApiError::LimitExceeded(_) => ErrorCode::LimitExceeded,
            ApiError::Internal(_) => ErrorCode::InternalError,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.code().status()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => error!("Internal error: {}", detail),
            ApiError::Database(detail) => error!("Datastore error: {}", detail),
            other => warn!("Request rejected: {}", other),
        }

        let code = self.code();
        let body = Envelope::failure(self.to_string(), code);
        (code.status(), body).into_response()
    }
}

/// Response for a handler that panicked: `INTERNAL_ERROR`, detail logged only
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_statuses() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Database("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::LimitExceeded("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_displayed() {
        let err = ApiError::Internal("connection pool poisoned".into());
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn panic_becomes_internal_error() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_errors_become_db_errors() {
        let err: ApiError = StoreError::Unavailable("down".into()).into();
        assert_eq!(err.code(), ErrorCode::DbError);
    }

    #[test]
    fn failure_envelope_shape() {
        let body = Envelope::failure("Unauthorized", ErrorCode::Unauthorized);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
        assert_eq!(json["error"]["message"], "Unauthorized");
    }

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(Envelope::ok(vec![1, 2])).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json["error"].is_null());
    }
}
