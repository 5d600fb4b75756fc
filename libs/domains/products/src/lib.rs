//! Products Domain
//!
//! Product catalogue stored as a flat JSON collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, auth per route
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, SKU uniqueness, partial updates
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + RecordStore implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::json::{JsonFileStore, JsonStoreConfig};
//! use domain_products::{handlers, ProductService, StoreProductRepository};
//!
//! let store = JsonFileStore::open(&JsonStoreConfig::new("./db"), "products");
//! let service = ProductService::new(StoreProductRepository::new(store));
//!
//! // `auth` is an `axum_helpers::RouteAuth`
//! let router = handlers::router(service, &auth);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

/// Collection name used for product records
pub const COLLECTION: &str = "products";

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{ListQuery, NewProduct, Product, ProductChanges, ProductPage, ProductPayload};
pub use repository::{ProductRepository, StoreProductRepository};
pub use service::ProductService;
pub use validation::{
    FieldErrors, Pagination, ValidationOutcome, validate_pagination, validate_product,
};
