//! Auth API routes

use axum::Router;
use domain_users::handlers;

use crate::state::AppState;

/// Create auth router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.auth.clone(), &state.route_auth)
}
