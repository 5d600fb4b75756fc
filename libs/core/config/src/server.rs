//! HTTP listener settings

use crate::{env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Address the HTTP server binds to.
///
/// Loaded from `HOST` (default `0.0.0.0`, every interface) and `PORT`
/// (default `3000`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|e| ConfigError::ParseError {
        key: "PORT".to_string(),
        details: format!("'{}' is not a valid port: {}", raw, e),
    })
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = parse_port(&env_or_default("PORT", &DEFAULT_PORT.to_string()))?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), DEFAULT_PORT)
    }
}
