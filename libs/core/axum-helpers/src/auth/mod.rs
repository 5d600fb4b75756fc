//! Authentication and authorization.
//!
//! - [`api_key_middleware`]: static `X-API-Key` check
//! - [`jwt_auth_middleware`]: HS256 bearer tokens, claims in request extensions
//! - [`require_roles`]: role allow-list, runs after the JWT check
//! - [`RouteAuth`]: applies the above to a domain router
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{ApiKeyConfig, JwtAuth, JwtConfig, RouteAuth};
//! use core_config::FromEnv;
//!
//! let auth = RouteAuth::new(ApiKeyConfig::from_env()?, JwtAuth::new(&JwtConfig::from_env()?));
//!
//! let reads = auth.api_key(Router::new().route("/products", get(list)));
//! let writes = auth.roles(Router::new().route("/products", post(create)), ["editor", "admin"]);
//! let router = reads.merge(writes);
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::{ApiKeyConfig, DEFAULT_TOKEN_TTL, JwtConfig};
pub use jwt::{JwtAuth, JwtClaims, TokenError};
pub use middleware::{
    API_KEY_HEADER, RequiredRoles, RouteAuth, api_key_middleware, jwt_auth_middleware,
    require_roles,
};
