use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS configuration.
///
/// Loaded from `CORS_ALLOWED_ORIGIN` (optional, comma-separated). When unset
/// every origin is allowed.
#[derive(Clone, Debug, Default)]
pub struct CorsConfig {
    pub allowed_origins: Option<Vec<HeaderValue>>,
}

impl CorsConfig {
    /// Parse a comma-separated origin list. Blank entries are skipped.
    pub fn from_list(raw: &str) -> Result<Self, ConfigError> {
        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "cannot be empty when set".to_string(),
            });
        }

        Ok(Self {
            allowed_origins: Some(origins),
        })
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CORS_ALLOWED_ORIGIN") {
            Ok(raw) => Self::from_list(&raw),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Creates the CORS layer for API services.
///
/// - Listed origins with credentials when configured, any origin otherwise
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept, X-API-Key
/// - 1 hour max age
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::HeaderName::from_static("x-api-key"),
        ])
        .max_age(Duration::from_secs(3600));

    match &config.allowed_origins {
        Some(origins) => {
            tracing::info!(?origins, "CORS restricted to configured origins");
            layer
                .allow_origin(AllowOrigin::list(origins.clone()))
                .allow_credentials(true)
        }
        None => layer.allow_origin(AllowOrigin::any()),
    }
}
