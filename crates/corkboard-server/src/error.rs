//! HTTP error type and the domain-error mapping.
//!
//! Wire shape is `{code, message}` with a non-2xx status; clients show
//! `message` verbatim and branch on `code`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use corkboard_core::DomainError;
use serde::Serialize;

use crate::summarizer::SummarizerError;

/// An error ready to leave the HTTP surface.
#[derive(Debug)]
pub struct ApiError {
    /// Response status.
    pub status: StatusCode,
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Human-readable message, shown verbatim by clients.
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 400 — structurally bad request (empty required field).
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    /// 422 — well-formed but unacceptable input.
    pub fn unprocessable(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, code, message)
    }

    /// 404 — referenced entity does not exist.
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, message)
    }

    /// 409 — uniqueness violation.
    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, code, message)
    }

    /// 500 — storage or infrastructure failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, message = %self.message, "request failed");
        } else {
            tracing::debug!(
                status = %self.status,
                code = self.code,
                message = %self.message,
                "request rejected"
            );
        }
        let body = Json(ErrorBody {
            code: self.code,
            message: &self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::unprocessable("validation_failed", message),
            DomainError::NotFound { .. } => Self::not_found("not_found", err.to_string()),
            DomainError::Conflict(message) => Self::conflict("conflict", message),
            DomainError::Storage(_) | DomainError::Internal(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<SummarizerError> for ApiError {
    fn from(err: SummarizerError) -> Self {
        match err {
            SummarizerError::NotConfigured => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "summarizer_unconfigured",
                err.to_string(),
            ),
            SummarizerError::Http(_)
            | SummarizerError::Upstream { .. }
            | SummarizerError::MalformedResponse => {
                Self::new(StatusCode::BAD_GATEWAY, "summarizer_failed", err.to_string())
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
