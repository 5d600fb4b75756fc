use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity as stored in the `users` collection
///
/// Users are seed data; the service never writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Login key, matched case-insensitively
    pub email: String,
    /// Argon2 PHC hash string (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password: String,
    /// Role tag checked by route guards, e.g. `admin`, `editor`, `viewer`
    pub role: String,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: String,
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}

/// Login request body
///
/// Both fields are optional on the wire so that a missing field yields the
/// same 400 as an empty one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: Option<String>,
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// `(email, password)` when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().filter(|v| !v.is_empty())?;
        let password = self.password.as_deref().filter(|v| !v.is_empty())?;
        Some((email, password))
    }
}

/// Successful login result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// HS256 JWT to send as `Authorization: Bearer <token>`
    pub token: String,
    pub user: UserProfile,
}
