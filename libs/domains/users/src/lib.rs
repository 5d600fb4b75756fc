//! Users Domain
//!
//! Read-only user accounts and the login flow built on them.
//!
//! # Features
//!
//! - Case-insensitive email lookup
//! - Password verification with Argon2
//! - JWT issuing and verification
//! - Login endpoint behind the API key
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /login
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ AuthService │  ← Credential checks, token issuing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + RecordStore implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, profile, login DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use database::json::{JsonFileStore, JsonStoreConfig};
//! use domain_users::{handlers, AuthService, StoreUserRepository};
//!
//! let store = JsonFileStore::open(&JsonStoreConfig::new("./db"), "users");
//! let service = AuthService::new(StoreUserRepository::new(store), route_auth.jwt.clone());
//!
//! let router = handlers::router(service, &route_auth);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

/// Collection name used for user records
pub const COLLECTION: &str = "users";

// Re-export commonly used types
pub use error::{AuthError, AuthResult};
pub use handlers::ApiDoc;
pub use models::{LoginRequest, LoginResponse, User, UserProfile};
pub use repository::{StoreUserRepository, UserRepository};
pub use service::{AuthService, hash_password};
