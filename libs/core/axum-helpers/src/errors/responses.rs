//! Reusable OpenAPI response types for consistent API documentation.

use crate::envelope::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "INTERNAL_SERVER_ERROR",
            "message": "Something went wrong",
            "details": {},
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products"
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body or missing input",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "BAD_REQUEST",
            "message": "Email and password are required",
            "details": {},
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/auth/login"
        }
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - field validation failed",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "VALIDATION_ERROR",
            "message": "Validation failed",
            "details": {
                "name": "Name must be at least 3 characters long",
                "price": "Price must be greater than 0"
            },
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products"
        }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "NOT_FOUND",
            "message": "Product not found",
            "details": {},
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products/0190a0b2-0000-7000-8000-000000000000"
        }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - missing or invalid API key / token",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "API_KEY_MISSING",
            "message": "API Key is required. Please provide X-API-Key header",
            "details": {},
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products"
        }
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - insufficient role",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "FORBIDDEN",
            "message": "Insufficient permissions. Required roles: admin",
            "details": { "userRole": "editor", "requiredRoles": ["admin"] },
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products/0190a0b2-0000-7000-8000-000000000000"
        }
    })
)]
pub struct ForbiddenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - resource already exists",
    content_type = "application/json",
    example = json!({
        "error": {
            "code": "CONFLICT",
            "message": "Product with this SKU already exists",
            "details": {},
            "timestamp": "2024-05-01T10:00:00.000Z",
            "path": "/api/products"
        }
    })
)]
pub struct ConflictResponse(pub ErrorResponse);
