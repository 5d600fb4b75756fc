//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI docs and cross-cutting middleware
//! - Health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//!
//! let root = health_router(app_info!());
//! let router = create_router::<ApiDoc>(root, api_routes, Environment::from_env(), &cors);
//!
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, ReadyResponse, health_router, readiness};
pub use shutdown::shutdown_signal;
