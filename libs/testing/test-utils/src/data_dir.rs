//! Temporary data directories for JSON-file stores
//!
//! Provides a `TestDataDir` helper that owns a fresh directory per test and
//! hands out `JsonFileStore`s rooted in it.

use std::path::Path;

use database::json::{JsonFileStore, JsonStoreConfig};
use serde_json::Value;
use tempfile::TempDir;

/// Test data directory wrapper that ensures proper cleanup
///
/// The directory and everything written into it is removed when this struct
/// is dropped.
pub struct TestDataDir {
    dir: TempDir,
    config: JsonStoreConfig,
}

impl TestDataDir {
    /// Create a new, empty data directory
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDataDir;
    ///
    /// # async fn example() {
    /// let data = TestDataDir::new();
    /// let products = data.store("products");
    /// # }
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary data directory");
        let config = JsonStoreConfig::new(dir.path());
        tracing::debug!(path = %dir.path().display(), "Test data directory created");

        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Store configuration pointing at this directory
    pub fn config(&self) -> &JsonStoreConfig {
        &self.config
    }

    /// Open the JSON-file store for `collection`
    pub fn store(&self, collection: &str) -> JsonFileStore {
        JsonFileStore::open(&self.config, collection)
    }

    /// Write `records` (a JSON array) as the raw content of `collection`
    pub async fn seed(&self, collection: &str, records: &Value) {
        let body = serde_json::to_string_pretty(records).expect("Failed to encode seed records");
        tokio::fs::write(self.config.collection_path(collection), body)
            .await
            .expect("Failed to write seed file");
    }

    /// Raw parsed content of `collection`, or `Value::Null` when the file is absent
    pub async fn read(&self, collection: &str) -> Value {
        match tokio::fs::read_to_string(self.config.collection_path(collection)).await {
            Ok(raw) => serde_json::from_str(&raw).expect("Collection file is not valid JSON"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Value::Null,
            Err(e) => panic!("Failed to read collection file: {}", e),
        }
    }
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}
