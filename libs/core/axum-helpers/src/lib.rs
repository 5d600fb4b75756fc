//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: API-key, JWT and role middleware
//! - **[`envelope`]**: success, paginated and error response envelopes
//! - **[`errors`]**: `AppError`, error codes and envelope rendering
//! - **[`extractors`]**: `ApiJson` body extractor
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{http::CorsConfig, server::{create_app, create_router, health_router}};
//! use core_config::{app_info, server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(
//!         health_router(app_info!()),
//!         api_routes,
//!         Environment::from_env(),
//!         &CorsConfig::default(),
//!     );
//!
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    ApiKeyConfig, JwtAuth, JwtClaims, JwtConfig, RequiredRoles, RouteAuth, TokenError,
    api_key_middleware, jwt_auth_middleware, require_roles,
};

// Re-export envelopes
pub use envelope::{
    ApiResponse, ErrorBody, ErrorResponse, PaginatedResponse, PaginationMeta, request_path,
};

// Re-export server types
pub use server::{
    HealthResponse, ReadyResponse, create_app, create_router, health_router, readiness,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{CorsConfig, create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorReport, UnauthorizedKind, render_error_envelope};

// Re-export extractors
pub use extractors::ApiJson;
