//! Configuration types for authentication.
//!
//! Both structs implement `core_config::FromEnv`, following the same pattern
//! as `ServerConfig` and `JsonStoreConfig`.

use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_or_default, env_required, parse_duration};

/// Default token lifetime when `JWT_EXPIRES_IN` is unset.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// JWT signing configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters
/// - `JWT_EXPIRES_IN` (optional, default `24h`) - `3600`, `90s`, `15m`, `24h`, `7d`
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HMAC signing secret (minimum 32 characters)
    pub secret: String,
    /// Lifetime of issued tokens
    pub expires_in: Duration,
}

impl JwtConfig {
    /// Create a config with the default 24h token lifetime.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            expires_in: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expires_in = parse_duration("JWT_EXPIRES_IN", &env_or_default("JWT_EXPIRES_IN", "24h"))?;

        Ok(Self { secret, expires_in })
    }
}

/// Static API key expected in the `X-API-Key` header.
///
/// Loaded from `API_KEY` (required).
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub api_key: String,
}

impl ApiKeyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("API_KEY")?;
        if api_key.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self { api_key })
    }
}
