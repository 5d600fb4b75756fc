//! Products API
//!
//! REST service for a product catalog stored as JSON files.
//!
//! ## Modules
//!
//! - `api`: route tables for `/api/products`, `/api/auth` and the root endpoints
//! - `config`: environment configuration
//! - `openapi`: combined OpenAPI document
//! - `state`: services shared by every router

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::create_router;

pub use config::Config;
pub use state::AppState;

/// Full application router with docs, fallback and middleware applied
pub fn app(state: &AppState) -> Router {
    create_router::<openapi::ApiDoc>(
        api::root_routes(state),
        api::routes(state),
        state.config.environment,
        &state.config.cors,
    )
}
