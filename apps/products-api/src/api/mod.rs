//! API routes module

pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/auth", auth::router(state))
}

/// Routes mounted at the root: welcome document, liveness and readiness
pub fn root_routes(state: &AppState) -> Router {
    health::router(state)
}
