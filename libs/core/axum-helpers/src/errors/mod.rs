pub mod codes;
pub mod handlers;
pub mod render;
pub mod responses;

pub use codes::ErrorCode;
pub use render::{ErrorReport, render_error_envelope};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::envelope::ErrorResponse;

/// Why a request was rejected with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedKind {
    ApiKeyMissing,
    InvalidApiKey,
    TokenMissing,
    InvalidTokenFormat,
    TokenExpired,
    InvalidToken,
    InvalidCredentials,
    AuthenticationRequired,
}

impl UnauthorizedKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            Self::ApiKeyMissing => ErrorCode::ApiKeyMissing,
            Self::InvalidApiKey => ErrorCode::InvalidApiKey,
            Self::TokenMissing => ErrorCode::TokenMissing,
            Self::InvalidTokenFormat => ErrorCode::InvalidTokenFormat,
            Self::TokenExpired => ErrorCode::TokenExpired,
            Self::InvalidToken => ErrorCode::InvalidToken,
            Self::InvalidCredentials => ErrorCode::InvalidCredentials,
            Self::AuthenticationRequired => ErrorCode::Unauthorized,
        }
    }
}

impl std::fmt::Display for UnauthorizedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.error_code().default_message())
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates define their own `thiserror` enums and convert into this
/// one; handlers only ever surface `AppError` (directly or via `From`).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Field → message map, rendered as `details`
    #[error("Validation failed: {0:?}")]
    Validation(BTreeMap<String, String>),

    #[error("Unauthorized: {0}")]
    Unauthorized(UnauthorizedKind),

    #[error("Forbidden: {message}")]
    Forbidden { message: String, details: Value },

    #[error("Not Found: {0}")]
    NotFound(String),

    /// No route matched
    #[error("Endpoint not found: {method} {url}")]
    EndpointNotFound { method: String, url: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    /// 403 for a user whose role is not among `required`.
    pub fn insufficient_role(user_role: Option<&str>, required: &[impl AsRef<str>]) -> Self {
        let required: Vec<&str> = required.iter().map(AsRef::as_ref).collect();
        Self::Forbidden {
            message: format!(
                "Insufficient permissions. Required roles: {}",
                required.join(", ")
            ),
            details: json!({
                "userRole": user_role,
                "requiredRoles": required,
            }),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::Unauthorized(kind) => kind.error_code(),
            Self::Forbidden { .. } => ErrorCode::Forbidden,
            Self::NotFound(_) | Self::EndpointNotFound { .. } => ErrorCode::NotFound,
            Self::Conflict(_) => ErrorCode::Conflict,
            Self::BadRequest(_) | Self::JsonExtractorRejection(_) => ErrorCode::BadRequest,
            Self::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    /// Break the error into the pieces of an error envelope, logging it on the way.
    pub fn into_report(self) -> ErrorReport {
        let code = self.error_code();

        let (message, details, debug) = match self {
            AppError::Validation(fields) => {
                tracing::info!(error_code = code.code(), ?fields, "Validation failed");
                (
                    code.default_message().to_string(),
                    Some(json!(fields)),
                    None,
                )
            }
            AppError::Unauthorized(kind) => {
                tracing::info!(error_code = code.code(), "Unauthorized: {}", code);
                (kind.to_string(), None, None)
            }
            AppError::Forbidden { message, details } => {
                tracing::info!(error_code = code.code(), "Forbidden: {}", message);
                (message, Some(details), None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None, None)
            }
            AppError::EndpointNotFound { method, url } => {
                tracing::info!(error_code = code.code(), %method, %url, "Endpoint not found");
                (
                    "Endpoint not found".to_string(),
                    Some(json!({ "method": method, "url": url })),
                    None,
                )
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = code.code(), "Conflict: {}", msg);
                (msg, None, None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (msg, None, None)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                (e.body_text(), None, None)
            }
            AppError::Internal(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                let debug = format!("Internal({:?})", msg);
                (msg, None, Some(debug))
            }
        };

        ErrorReport {
            code,
            message,
            details,
            debug,
        }
    }
}

impl IntoResponse for AppError {
    /// Renders the envelope without request context and attaches the
    /// [`ErrorReport`] so [`render_error_envelope`] can fill in `path` and
    /// the debug details.
    fn into_response(self) -> Response {
        let report = self.into_report();
        let body = Json(ErrorResponse::new(
            report.code.as_str(),
            report.message.clone(),
            report.details.clone(),
            "",
        ));

        let mut response = (report.code.status(), body).into_response();
        response.extensions_mut().insert(report);
        response
    }
}
