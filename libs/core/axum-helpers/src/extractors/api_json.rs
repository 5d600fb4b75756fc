//! JSON body extractor that rejects with the API's error envelope.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like [`axum::Json`], but a missing or malformed body becomes a
/// `400 BAD_REQUEST` error envelope instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ApiJson;
///
/// async fn login(ApiJson(body): ApiJson<LoginRequest>) -> Result<..., AppError> {
///     ...
/// }
/// ```
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(data))
    }
}
