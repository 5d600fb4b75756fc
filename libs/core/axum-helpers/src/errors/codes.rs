//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - the string identifier clients see in `error.code` (e.g. `"TOKEN_EXPIRED"`)
//! - an integer code for logs and monitoring (e.g. 1105)
//! - the HTTP status it maps to
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidApiKey;
//! assert_eq!(code.as_str(), "INVALID_API_KEY");
//! assert_eq!(code.status().as_u16(), 401);
//! assert_eq!(code.default_message(), "Invalid API Key");
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request errors (1000s)
    /// Request payload failed field validation
    ValidationError,

    /// Malformed request (unparseable body, missing required input)
    BadRequest,

    /// Requested resource does not exist
    NotFound,

    /// Request conflicts with current state (e.g. duplicate SKU)
    Conflict,

    // Authentication errors (1100s)
    /// `X-API-Key` header absent
    ApiKeyMissing,

    /// `X-API-Key` header does not match the configured key
    InvalidApiKey,

    /// `Authorization` header absent
    TokenMissing,

    /// `Authorization` header is not `Bearer <token>`
    InvalidTokenFormat,

    /// Token signature is valid but `exp` has passed
    TokenExpired,

    /// Token could not be verified
    InvalidToken,

    /// Login failed; never reveals which half was wrong
    InvalidCredentials,

    /// A role check ran without an authenticated user
    Unauthorized,

    // Authorization errors (1200s)
    /// Authenticated user lacks one of the required roles
    Forbidden,

    // Server errors (5000s)
    InternalServerError,
}

impl ErrorCode {
    /// String identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::ApiKeyMissing => "API_KEY_MISSING",
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::TokenMissing => "TOKEN_MISSING",
            Self::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1099: request errors
    /// - 1100-1199: authentication
    /// - 1200-1299: authorization
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::BadRequest => 1002,
            Self::NotFound => 1004,
            Self::Conflict => 1008,

            Self::ApiKeyMissing => 1101,
            Self::InvalidApiKey => 1102,
            Self::TokenMissing => 1103,
            Self::InvalidTokenFormat => 1104,
            Self::TokenExpired => 1105,
            Self::InvalidToken => 1106,
            Self::InvalidCredentials => 1107,
            Self::Unauthorized => 1108,

            Self::Forbidden => 1201,

            Self::InternalServerError => 5001,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::ApiKeyMissing
            | Self::InvalidApiKey
            | Self::TokenMissing
            | Self::InvalidTokenFormat
            | Self::TokenExpired
            | Self::InvalidToken
            | Self::InvalidCredentials
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Default user-facing message. Variants carrying their own message
    /// (`NotFound`, `Conflict`, `BadRequest`, ...) override it.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::ApiKeyMissing => "API Key is required. Please provide X-API-Key header",
            Self::InvalidApiKey => "Invalid API Key",
            Self::TokenMissing => "Authorization token is required",
            Self::InvalidTokenFormat => "Token format must be: Bearer <token>",
            Self::TokenExpired => "Token has expired",
            Self::InvalidToken => "Invalid token",
            Self::InvalidCredentials => "Invalid email or password",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Insufficient permissions",
            Self::InternalServerError => "Something went wrong",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
