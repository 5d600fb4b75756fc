use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::common::StoreResult;
use crate::record::{self, Record, RecordStore};

/// Process-local [`RecordStore`] backed by a `Vec`.
///
/// Cloning shares the underlying collection.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    collection: Arc<str>,
    records: Arc<Mutex<Vec<Record>>>,
}

impl InMemoryStore {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: Arc::from(collection.into()),
            records: Arc::default(),
        }
    }

    /// Create a store pre-populated with `records`, kept as given.
    pub fn with_records(collection: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            collection: Arc::from(collection.into()),
            records: Arc::new(Mutex::new(records)),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn read_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.lock().await.clone())
    }

    async fn write_all(&self, records: Vec<Record>) -> StoreResult<()> {
        *self.records.lock().await = records;
        Ok(())
    }

    async fn create(&self, fields: Record) -> StoreResult<Record> {
        let mut records = self.records.lock().await;
        Ok(record::insert_new(&mut records, fields, Utc::now()))
    }

    async fn update(&self, id: &str, fields: Record) -> StoreResult<Option<Record>> {
        let mut records = self.records.lock().await;
        Ok(record::merge_into(&mut records, id, fields, Utc::now()))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut records = self.records.lock().await;
        Ok(record::remove_by_id(&mut records, id))
    }
}
