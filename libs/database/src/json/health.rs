use std::time::Instant;

use tracing::debug;

use super::JsonStoreConfig;
use crate::common::{StoreError, StoreResult};

/// Create the data directory (and parents) if it does not exist yet.
pub async fn ensure_data_dir(config: &JsonStoreConfig) -> StoreResult<()> {
    tokio::fs::create_dir_all(config.data_dir())
        .await
        .map_err(|e| StoreError::io(config.data_dir(), e))
}

/// Health check result for detailed status reporting
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

/// Verify the data directory exists and is writable.
///
/// A directory that has not been created yet is reported unhealthy; call
/// [`ensure_data_dir`] at startup.
pub async fn check_health(config: &JsonStoreConfig) -> HealthStatus {
    let start = Instant::now();
    debug!(data_dir = %config.data_dir().display(), "Running JSON store health check");

    let outcome = match tokio::fs::metadata(config.data_dir()).await {
        Ok(meta) if !meta.is_dir() => Err("data path is not a directory".to_string()),
        Ok(meta) if meta.permissions().readonly() => Err("data directory is read-only".to_string()),
        Ok(_) => Ok(()),
        Err(e) => Err(format!("data directory unavailable: {}", e)),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    match outcome {
        Ok(()) => HealthStatus::healthy(elapsed),
        Err(message) => HealthStatus::unhealthy(message, elapsed),
    }
}
