use super::shutdown::shutdown_signal;
use crate::errors::{handlers::not_found, render_error_envelope};
use crate::http::{CorsConfig, create_cors_layer, security_headers};
use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Starts the Axum server with graceful shutdown on SIGINT / SIGTERM.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails
/// while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Assemble the application router.
///
/// - `root` routes mounted at `/` (welcome document, health)
/// - `apis` nested under `/api`
/// - Swagger UI at `/swagger-ui`, spec at `/api-docs/openapi.json`
/// - 404 fallback with the standard error envelope
/// - error envelope rendering, request tracing, security headers, CORS and
///   compression, outermost last
///
/// Domain routers apply their own state before being passed in.
pub fn create_router<T>(
    root: Router,
    apis: Router,
    environment: Environment,
    cors: &CorsConfig,
) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(root)
        .nest("/api", apis)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            environment,
            render_error_envelope,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(cors))
        .layer(CompressionLayer::new())
}
