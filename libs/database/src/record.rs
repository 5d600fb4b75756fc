//! Records, the [`RecordStore`] contract and the collection operations shared
//! by every backend.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::common::{StoreError, StoreResult};

/// A stored entity: one flat JSON object.
pub type Record = Map<String, Value>;

pub const ID_FIELD: &str = "id";
pub const CREATED_AT_FIELD: &str = "createdAt";
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Fields owned by the store. Callers can never overwrite them.
const MANAGED_FIELDS: [&str; 3] = [ID_FIELD, CREATED_AT_FIELD, UPDATED_AT_FIELD];

/// Generate a new record id.
///
/// UUID v7: a millisecond timestamp prefix followed by random bits, so ids
/// are collision-resistant and roughly sortable by creation time.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Convenience accessors on [`Record`].
pub trait RecordExt {
    /// The record's `id`, if it is a string.
    fn id(&self) -> Option<&str>;

    /// True when every field of `criteria` is present and equal in `self`.
    fn matches(&self, criteria: &Record) -> bool;
}

impl RecordExt for Record {
    fn id(&self) -> Option<&str> {
        self.get(ID_FIELD).and_then(Value::as_str)
    }

    fn matches(&self, criteria: &Record) -> bool {
        criteria
            .iter()
            .all(|(key, expected)| self.get(key) == Some(expected))
    }
}

/// Serialize any value that encodes as a JSON object into a [`Record`].
pub fn to_record<T: Serialize>(value: &T) -> StoreResult<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(<serde_json::Error as serde::ser::Error>::custom(
            format!("expected a JSON object, got {}", other),
        ))),
    }
}

/// Deserialize a [`Record`] into a typed value.
pub fn from_record<T: DeserializeOwned>(record: Record) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
/// (`2024-05-01T10:00:00.000Z`), usable as a `#[serde(with = "...")]` module.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn format(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }

    /// Current time formatted as an ISO-8601 string.
    pub fn now() -> String {
        format(&Utc::now())
    }

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 timestamp '{}'", raw)))
    }
}

/// Storage contract for one collection of records.
///
/// Implementations must make `write_all` atomic from the reader's point of
/// view and must serialize their own read-modify-write cycles.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Logical collection name (e.g. `"products"`).
    fn collection(&self) -> &str;

    /// All records in storage order. An absent collection is empty.
    async fn read_all(&self) -> StoreResult<Vec<Record>>;

    /// Replace the whole collection.
    async fn write_all(&self, records: Vec<Record>) -> StoreResult<()>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|record| record.id() == Some(id)))
    }

    /// First record whose fields equal every field in `criteria`.
    async fn find_one(&self, criteria: &Record) -> StoreResult<Option<Record>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|record| record.matches(criteria)))
    }

    /// Append a new record with a fresh id and `createdAt = updatedAt = now`.
    async fn create(&self, fields: Record) -> StoreResult<Record>;

    /// Merge `fields` into the record with `id`. Returns `None` when absent.
    async fn update(&self, id: &str, fields: Record) -> StoreResult<Option<Record>>;

    /// Remove the record with `id`. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;
}

fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp.timestamp_millis()).unwrap_or(timestamp)
}

/// `updatedAt` must move forward on every mutation, even when two writes land
/// in the same millisecond.
fn next_update_stamp(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = truncate_to_millis(now);
    match previous {
        Some(previous) if now <= previous => previous + TimeDelta::milliseconds(1),
        _ => now,
    }
}

fn copy_unmanaged(target: &mut Record, fields: Record) {
    for (key, value) in fields {
        if !MANAGED_FIELDS.contains(&key.as_str()) {
            target.insert(key, value);
        }
    }
}

pub(crate) fn insert_new(records: &mut Vec<Record>, fields: Record, now: DateTime<Utc>) -> Record {
    let stamp = Value::String(iso8601::format(&truncate_to_millis(now)));

    let mut record = Record::new();
    record.insert(ID_FIELD.to_string(), Value::String(generate_id()));
    copy_unmanaged(&mut record, fields);
    record.insert(CREATED_AT_FIELD.to_string(), stamp.clone());
    record.insert(UPDATED_AT_FIELD.to_string(), stamp);

    records.push(record.clone());
    record
}

pub(crate) fn merge_into(
    records: &mut [Record],
    id: &str,
    fields: Record,
    now: DateTime<Utc>,
) -> Option<Record> {
    let record = records.iter_mut().find(|record| record.id() == Some(id))?;

    let previous = record
        .get(UPDATED_AT_FIELD)
        .and_then(Value::as_str)
        .and_then(iso8601::parse);

    copy_unmanaged(record, fields);
    record.insert(
        UPDATED_AT_FIELD.to_string(),
        Value::String(iso8601::format(&next_update_stamp(previous, now))),
    );

    Some(record.clone())
}

pub(crate) fn remove_by_id(records: &mut Vec<Record>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != Some(id));
    records.len() != before
}
