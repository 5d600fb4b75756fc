use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum_helpers::{JwtAuth, JwtClaims};
use std::sync::{Arc, LazyLock};
use tracing::instrument;

use crate::error::{AuthError, AuthResult};
use crate::models::{LoginRequest, LoginResponse, UserProfile};
use crate::repository::UserRepository;

/// Verified when the email is unknown, so a miss costs as much as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("placeholder-password-for-unknown-users").ok());

/// Hash a password into an Argon2 PHC string (random salt).
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Service layer for login and token checks
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: R, jwt: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            jwt,
        }
    }

    /// Check credentials and issue a token
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> AuthResult<LoginResponse> {
        let (email, password) = request.credentials().ok_or(AuthError::MissingCredentials)?;

        let Some(user) = self.repository.get_by_email(email).await? else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(password, dummy);
            }
            tracing::info!("Login rejected");
            tracing::debug!(email = %email, "Login for unknown email");
            return Err(AuthError::UnknownUser(email.to_string()));
        };

        if !verify_password(password, &user.password)? {
            tracing::info!("Login rejected");
            tracing::debug!(user_id = %user.id, "Wrong password");
            return Err(AuthError::WrongPassword);
        }

        let token = self.jwt.issue(&user.id, &user.email, &user.role)?;
        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserProfile::from(user),
        })
    }

    /// Decode and check a token issued by [`AuthService::login`]
    pub fn verify_token(&self, token: &str) -> AuthResult<JwtClaims> {
        Ok(self.jwt.verify(token)?)
    }
}

impl<R: UserRepository> Clone for AuthService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            jwt: self.jwt.clone(),
        }
    }
}
