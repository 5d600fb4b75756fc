//! Error envelope rendering with request context.

use axum::{
    Json,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use serde_json::{Map, Value};

use super::ErrorCode;
use crate::envelope::{ErrorResponse, request_path};

/// Pending error attached to a response by `AppError::into_response`.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<Value>,
    /// Debug rendering of the underlying error, server errors only
    pub debug: Option<String>,
}

impl ErrorReport {
    /// Build the final envelope. `debug` lands in `details.debug` only when
    /// `expose_debug` is set.
    pub fn to_envelope(&self, path: impl Into<String>, expose_debug: bool) -> ErrorResponse {
        let details = match (&self.debug, expose_debug) {
            (Some(debug), true) => {
                let mut details = match self.details.clone() {
                    Some(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                details.insert("debug".to_string(), Value::String(debug.clone()));
                Some(Value::Object(details))
            }
            _ => self.details.clone(),
        };

        ErrorResponse::new(self.code.as_str(), self.message.clone(), details, path)
    }
}

/// Middleware that re-renders error responses with the request path and,
/// outside production, debug details.
///
/// Must sit outside every router layer that can produce an `AppError`.
///
/// # Example
///
/// ```ignore
/// let app = router.layer(axum::middleware::from_fn_with_state(
///     Environment::from_env(),
///     render_error_envelope,
/// ));
/// ```
pub async fn render_error_envelope(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let path = request_path(request.uri());
    let mut response = next.run(request).await;

    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    let envelope = report.to_envelope(path, environment.exposes_error_details());
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let body = Json(envelope).into_response().into_body();

    Response::from_parts(parts, body)
}
