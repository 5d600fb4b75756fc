use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::JsonStoreConfig;
use crate::common::{StoreError, StoreResult};
use crate::record::{self, Record, RecordStore};

/// [`RecordStore`] persisting one collection as a JSON file.
///
/// Clones share the write lock, so every handle to the same collection
/// serializes its read-modify-write cycles. Open each collection once and
/// clone the handle rather than opening it twice.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    collection: Arc<str>,
    path: Arc<Path>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// Bind to `<data_dir>/<collection>.json`. The file is created on first write.
    pub fn open(config: &JsonStoreConfig, collection: impl Into<String>) -> Self {
        let collection = collection.into();
        let path = config.collection_path(&collection);
        Self {
            collection: Arc::from(collection),
            path: Arc::from(path),
            write_lock: Arc::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt(&self, details: impl Into<String>) -> StoreError {
        StoreError::Corrupt {
            collection: self.collection.to_string(),
            details: details.into(),
        }
    }

    async fn load(&self) -> StoreResult<Vec<Record>> {
        let raw = match fs::read_to_string(&*self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Collection file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&*self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Value> =
            serde_json::from_str(&raw).map_err(|e| self.corrupt(format!("not a JSON array: {}", e)))?;

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                Value::Object(record) => Ok(record),
                _ => Err(self.corrupt(format!("entry {} is not an object", index))),
            })
            .collect()
    }

    async fn persist(&self, records: &[Record]) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        fs::rename(&temp, &*self.path)
            .await
            .map_err(|e| StoreError::io(&*self.path, e))?;

        debug!(path = %self.path.display(), count = records.len(), "Collection persisted");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn read_all(&self) -> StoreResult<Vec<Record>> {
        self.load().await
    }

    async fn write_all(&self, records: Vec<Record>) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.persist(&records).await
    }

    #[instrument(skip(self, fields), fields(collection = %self.collection))]
    async fn create(&self, fields: Record) -> StoreResult<Record> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let created = record::insert_new(&mut records, fields, Utc::now());
        self.persist(&records).await?;
        Ok(created)
    }

    #[instrument(skip(self, fields), fields(collection = %self.collection))]
    async fn update(&self, id: &str, fields: Record) -> StoreResult<Option<Record>> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let Some(updated) = record::merge_into(&mut records, id, fields, Utc::now()) else {
            return Ok(None);
        };
        self.persist(&records).await?;
        Ok(Some(updated))
    }

    #[instrument(skip(self), fields(collection = %self.collection))]
    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        if !record::remove_by_id(&mut records, id) {
            return Ok(false);
        }
        self.persist(&records).await?;
        Ok(true)
    }
}
