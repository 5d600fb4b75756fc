//! Response envelopes shared by every endpoint.
//!
//! ```json
//! { "success": true, "message": "...", "data": {...}, "timestamp": "...", "path": "/api/..." }
//! { "success": true, "data": [...], "pagination": {...}, "timestamp": "...", "path": "..." }
//! { "error": { "code": "...", "message": "...", "details": {...}, "timestamp": "...", "path": "..." } }
//! ```

use axum::{
    Json,
    http::Uri,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Current time as ISO-8601 UTC with millisecond precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Request path including the query string, as the client sent it.
pub fn request_path(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Success envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub timestamp: String,
    pub path: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            timestamp: timestamp(),
            path: path.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// `total_pages = ceil(total / limit)`; a zero limit is treated as 1.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = total.div_ceil(u64::from(limit.max(1)));
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next_page: u64::from(page) < total_pages,
            has_prev_page: page > 1,
        }
    }
}

/// Paginated list envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
    pub timestamp: String,
    pub path: String,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64, path: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            pagination: PaginationMeta::new(page, limit, total),
            timestamp: timestamp(),
            path: path.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Body of the error envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable identifier, e.g. `TOKEN_EXPIRED`
    pub code: String,
    pub message: String,
    /// Structured context; `{}` when there is none
    #[schema(value_type = Object)]
    pub details: Value,
    pub timestamp: String,
    pub path: String,
}

/// Error envelope returned for every failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<Value>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: details.unwrap_or_else(|| Value::Object(Map::new())),
                timestamp: timestamp(),
                path: path.into(),
            },
        }
    }
}
