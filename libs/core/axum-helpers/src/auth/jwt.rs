use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::config::JwtConfig;
use crate::errors::{AppError, UnauthorizedKind};

/// JWT claims carried by access tokens.
///
/// Inserted into request extensions by `jwt_auth_middleware`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JwtClaims {
    /// User id
    pub id: String,
    pub email: String,
    /// Role tag used by `require_roles`
    pub role: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::Unauthorized(UnauthorizedKind::TokenExpired),
            TokenError::Invalid(_) => AppError::Unauthorized(UnauthorizedKind::InvalidToken),
            TokenError::Signing(e) => AppError::Internal(format!("Failed to sign token: {}", e)),
        }
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// HS256 token issuer and verifier.
///
/// Cheap to clone; the keys are shared.
#[derive(Clone)]
pub struct JwtAuth {
    keys: Arc<Keys>,
    expires_in: Duration,
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

impl JwtAuth {
    /// Create an issuer from config.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let jwt = JwtAuth::new(&JwtConfig::from_env()?);
    /// let token = jwt.issue("user-1", "ana@example.com", "admin")?;
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!(expires_in = ?config.expires_in, "JWT auth initialized");

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            expires_in: config.expires_in,
        }
    }

    /// Sign a token for the given user.
    pub fn issue(&self, id: &str, email: &str, role: &str) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.expires_in.as_secs()).unwrap_or(i64::MAX);

        let claims = JwtClaims {
            id: id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<JwtClaims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}
