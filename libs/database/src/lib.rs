//! Record storage for flat JSON collections.
//!
//! A *collection* is an ordered list of JSON objects ([`Record`]s). Every
//! backend implements [`RecordStore`], which offers whole-collection reads and
//! writes plus the usual find / create / update / delete helpers on top.
//!
//! # Features
//!
//! - `json` (default) - [`json::JsonFileStore`], one pretty-printed JSON array per file
//! - `config` - `core_config::FromEnv` support for [`json::JsonStoreConfig`]
//!
//! [`memory::InMemoryStore`] is always available and is what tests use when
//! the file format itself is not under test.
//!
//! # Example
//!
//! ```ignore
//! use database::json::{JsonFileStore, JsonStoreConfig};
//! use database::{RecordExt, RecordStore, to_record};
//! use serde_json::json;
//!
//! let config = JsonStoreConfig::new("./db");
//! let products = JsonFileStore::open(&config, "products");
//!
//! let created = products
//!     .create(to_record(&json!({ "name": "Desk", "sku": "DESK-1" }))?)
//!     .await?;
//! let found = products.find_by_id(created.id().unwrap_or_default()).await?;
//! ```

pub mod common;
pub mod memory;
pub mod record;

#[cfg(feature = "json")]
pub mod json;

pub use common::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use record::{
    CREATED_AT_FIELD, ID_FIELD, Record, RecordExt, RecordStore, UPDATED_AT_FIELD, from_record,
    generate_id, iso8601, to_record,
};

#[cfg(feature = "json")]
pub use json::{JsonFileStore, JsonStoreConfig};
