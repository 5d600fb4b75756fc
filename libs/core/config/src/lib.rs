//! Shared configuration primitives: the [`FromEnv`] trait, the runtime
//! [`Environment`], env-var helpers and tracing setup.

pub mod server;
pub mod tracing;

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Runtime environment, read from `APP_ENV`.
///
/// Production switches logs to JSON and strips debug details from
/// error responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Whether error responses may expose internal debug details.
    pub fn exposes_error_details(&self) -> bool {
        self.is_development()
    }
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Parse a duration such as `"3600"`, `"90s"`, `"15m"`, `"24h"` or `"7d"`.
///
/// A bare number is read as seconds. `key` is only used for error reporting.
pub fn parse_duration(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    let raw = raw.trim();
    let parse_error = |details: String| ConfigError::ParseError {
        key: key.to_string(),
        details,
    };

    let split_at = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, unit) = raw.split_at(split_at);

    let amount: u64 = amount
        .parse()
        .map_err(|_| parse_error(format!("'{}' is not a valid duration", raw)))?;

    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        other => {
            return Err(parse_error(format!(
                "unknown duration unit '{}' (expected s, m, h or d)",
                other
            )))
        }
    };

    amount
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(|| parse_error(format!("'{}' is too large", raw)))
}

/// Static application identity reported by health endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
            assert!(env.exposes_error_details());
        });
    }

    #[test]
    fn test_environment_production() {
        temp_env::with_var("APP_ENV", Some("production"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Production);
            assert!(env.is_production());
            assert!(!env.is_development());
            assert!(!env.exposes_error_details());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Production);
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default_with_value() {
        temp_env::with_var("TEST_VAR", Some("test_value"), || {
            let result = env_or_default("TEST_VAR", "default");
            assert_eq!(result, "test_value");
        });
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("MISSING_VAR", || {
            let result = env_or_default("MISSING_VAR", "default_value");
            assert_eq!(result, "default_value");
        });
    }

    #[test]
    fn test_env_required_success() {
        temp_env::with_var("REQUIRED_VAR", Some("required_value"), || {
            let result = env_required("REQUIRED_VAR");
            assert!(result.is_ok());
            assert_eq!(result.unwrap(), "required_value");
        });
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("TTL", "3600").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("TTL", "90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("TTL", "15m").unwrap(), Duration::from_secs(900));
        assert_eq!(parse_duration("TTL", "24h").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse_duration("TTL", "7d").unwrap(), Duration::from_secs(604_800));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        let err = parse_duration("JWT_EXPIRES_IN", "soon").unwrap_err();
        assert!(err.to_string().contains("JWT_EXPIRES_IN"));

        let err = parse_duration("JWT_EXPIRES_IN", "10w").unwrap_err();
        assert!(err.to_string().contains("unknown duration unit"));
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        let err = parse_duration("JWT_EXPIRES_IN", "300000000000000d").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "JWT_EXPIRES_IN"));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_app_info_macro_uses_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("MISSING_REQUIRED", || {
            let result = env_required("MISSING_REQUIRED");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(err.to_string().contains("MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }
}
