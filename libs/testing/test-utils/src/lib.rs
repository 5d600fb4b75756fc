//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `TestDataDir`: temporary JSON data directory with automatic cleanup
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataDir, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_store_test() {
//!     let data = TestDataDir::new();
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let products = data.store("products");
//!     let payload = builder.product("main");
//! }
//! ```

use serde_json::{Value, json};
use uuid::Uuid;

mod data_dir;

pub use data_dir::TestDataDir;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Deterministic user id
    pub fn user_id(&self) -> String {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes).to_string()
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("product", "main");
    /// // Returns: "test-product-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// SKU unique to this builder and `suffix`, always at least 5 characters
    pub fn sku(&self, suffix: &str) -> String {
        format!("SKU-{:05}-{}", self.seed % 100_000, suffix)
    }

    pub fn email(&self, local: &str) -> String {
        format!("{}+{}@example.com", local, self.seed % 100_000)
    }

    /// A product payload that passes validation
    pub fn product(&self, suffix: &str) -> Value {
        json!({
            "name": self.name("product", suffix),
            "sku": self.sku(suffix),
            "price": 19.99,
            "stock": 5,
            "category": "Office",
            "description": "Generated for tests"
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `body` is an error envelope carrying `code`
    pub fn assert_error_code(body: &Value, code: &str) {
        assert_eq!(
            body["error"]["code"], code,
            "expected error code {}, got body {}",
            code, body
        );
    }

    /// Assert that `body` is a success envelope and return its `data`
    pub fn assert_success(body: &Value) -> &Value {
        assert_eq!(body["success"], true, "expected success envelope, got {}", body);
        &body["data"]
    }
}
