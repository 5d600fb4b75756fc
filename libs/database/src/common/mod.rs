//! Common utilities shared across all store implementations

pub mod error;

pub use error::{StoreError, StoreResult};
