//! JSON file backend
//!
//! Each collection lives in `<data_dir>/<collection>.json` as a pretty-printed
//! array of objects. Writes go to a sibling temp file that is then renamed
//! over the target, so readers only ever see a complete document.

mod config;
mod health;
mod store;

pub use config::JsonStoreConfig;
pub use health::{HealthStatus, check_health, ensure_data_dir};
pub use store::JsonFileStore;
