use async_trait::async_trait;
use database::{RecordStore, from_record};

use crate::error::AuthResult;
use crate::models::User;

/// Read access to user accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by email, ignoring case
    async fn get_by_email(&self, email: &str) -> AuthResult<Option<User>>;
}

/// [`UserRepository`] over any [`RecordStore`] collection
#[derive(Clone)]
pub struct StoreUserRepository<S> {
    store: S,
}

impl<S: RecordStore> StoreUserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn find(&self, matches: impl Fn(&User) -> bool + Send) -> AuthResult<Option<User>> {
        for record in self.store.read_all().await? {
            let user: User = from_record(record)?;
            if matches(&user) {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl<S: RecordStore> UserRepository for StoreUserRepository<S> {
    async fn get_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let email = email.to_lowercase();
        self.find(|user| user.email.to_lowercase() == email).await
    }
}
