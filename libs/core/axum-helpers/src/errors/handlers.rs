use axum::extract::OriginalUri;
use axum::http::Method;

use super::AppError;
use crate::envelope::request_path;

/// Fallback handler for unmatched routes.
///
/// ```ignore
/// let app = Router::new().nest("/api", apis).fallback(not_found);
/// ```
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::EndpointNotFound {
        method: method.to_string(),
        url: request_path(&uri),
    }
}
