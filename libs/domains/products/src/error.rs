use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product with SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Invalid input: {0:?}")]
    Validation(FieldErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::DuplicateSku(_) => {
                AppError::Conflict("Product with this SKU already exists".to_string())
            }
            ProductError::Validation(fields) => AppError::Validation(fields),
            ProductError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::NotFound("p1".into()), StatusCode::NOT_FOUND),
            (ProductError::DuplicateSku("DESK-1".into()), StatusCode::CONFLICT),
            (
                ProductError::Validation(FieldErrors::from([(
                    "name".to_string(),
                    "Name is required".to_string(),
                )])),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ProductError::Store(StoreError::Corrupt {
                    collection: "products".into(),
                    details: "not an array".into(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_public_messages() {
        let AppError::NotFound(message) = ProductError::NotFound("p1".into()).into() else {
            panic!("expected NotFound");
        };
        assert_eq!(message, "Product not found");

        let AppError::Conflict(message) = ProductError::DuplicateSku("X".into()).into() else {
            panic!("expected Conflict");
        };
        assert_eq!(message, "Product with this SKU already exists");
    }
}
