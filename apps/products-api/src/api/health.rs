//! Welcome, liveness and readiness endpoints

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{health_router, readiness, server::health::HealthCheckFuture};
use core_config::AppInfo;
use database::json::{JsonStoreConfig, check_health};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Endpoints {
    auth: &'static str,
    products: &'static str,
}

#[derive(Serialize)]
struct WelcomeResponse {
    message: String,
    version: &'static str,
    documentation: &'static str,
    endpoints: Endpoints,
    note: &'static str,
}

async fn welcome(State(app): State<AppInfo>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("{} REST API", app.name),
        version: app.version,
        documentation: "/swagger-ui",
        endpoints: Endpoints {
            auth: "/api/auth",
            products: "/api/products",
        },
        note: "Send the API key in the X-API-Key header for read and login endpoints",
    })
}

async fn ready(State(store): State<JsonStoreConfig>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "storage",
        Box::pin(async {
            let status = check_health(&store).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "Storage checked");
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_default())
            }
        }),
    )];

    readiness(checks).await
}

pub fn router(state: &AppState) -> Router {
    let welcome = Router::new()
        .route("/", get(welcome))
        .with_state(state.config.app.clone());
    let ready = Router::new()
        .route("/ready", get(ready))
        .with_state(state.config.store.clone());

    welcome
        .merge(ready)
        .merge(health_router(state.config.app.clone()))
}
