use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, TokenError, UnauthorizedKind};
use database::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    /// No user has this email. Reported to clients as invalid credentials.
    #[error("No user with email '{0}'")]
    UnknownUser(String),

    /// Password did not match. Reported to clients as invalid credentials.
    #[error("Wrong password")]
    WrongPassword,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => {
                AppError::BadRequest("Email and password are required".to_string())
            }
            AuthError::UnknownUser(_) | AuthError::WrongPassword => {
                AppError::Unauthorized(UnauthorizedKind::InvalidCredentials)
            }
            AuthError::Token(e) => e.into(),
            AuthError::PasswordHash(msg) => AppError::Internal(msg),
            AuthError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_share_one_code() {
        let unknown: AppError = AuthError::UnknownUser("x@example.com".into()).into();
        let wrong: AppError = AuthError::WrongPassword.into();

        assert_eq!(unknown.error_code(), wrong.error_code());
        assert_eq!(unknown.error_code().as_str(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_missing_credentials_is_bad_request() {
        let error: AppError = AuthError::MissingCredentials.into();
        assert_eq!(error.error_code().as_str(), "BAD_REQUEST");
    }

    #[test]
    fn test_token_errors_keep_their_codes() {
        let expired: AppError = AuthError::Token(TokenError::Expired).into();
        assert_eq!(expired.error_code().as_str(), "TOKEN_EXPIRED");
    }
}
