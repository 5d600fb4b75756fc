use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::{Next, from_fn_with_state},
    response::Response,
};

use super::config::ApiKeyConfig;
use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::{AppError, UnauthorizedKind};

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "x-api-key";

fn non_empty_header<'a>(headers: &'a HeaderMap, name: impl header::AsHeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

/// Reject requests whose `X-API-Key` header is absent or wrong.
pub async fn api_key_middleware(
    State(config): State<ApiKeyConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(provided) = non_empty_header(request.headers(), API_KEY_HEADER) else {
        tracing::debug!("Request without API key");
        return Err(AppError::Unauthorized(UnauthorizedKind::ApiKeyMissing));
    };

    if provided != config.api_key {
        tracing::debug!("Request with invalid API key");
        return Err(AppError::Unauthorized(UnauthorizedKind::InvalidApiKey));
    }

    Ok(next.run(request).await)
}

/// Split `Authorization: Bearer <token>`. Anything other than exactly two
/// space-separated parts with a literal `Bearer` scheme is malformed.
fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Validate the bearer token and insert [`JwtClaims`] into request extensions.
///
/// # Example
///
/// ```ignore
/// let protected = Router::new()
///     .route("/products", post(create))
///     .route_layer(axum::middleware::from_fn_with_state(jwt, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(value) = non_empty_header(request.headers(), header::AUTHORIZATION) else {
        tracing::debug!("No Authorization header");
        return Err(AppError::Unauthorized(UnauthorizedKind::TokenMissing));
    };

    let token = bearer_token(value)
        .ok_or(AppError::Unauthorized(UnauthorizedKind::InvalidTokenFormat))?;

    let claims = auth.verify(token).inspect_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Roles allowed through [`require_roles`].
#[derive(Clone, Debug)]
pub struct RequiredRoles(Arc<[String]>);

impl RequiredRoles {
    pub fn new<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self(roles.into_iter().map(Into::into).collect())
    }

    pub fn allows(&self, role: &str) -> bool {
        self.0.iter().any(|allowed| allowed == role)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Allow the request only when the authenticated user's role is listed.
///
/// Must run after [`jwt_auth_middleware`].
pub async fn require_roles(
    State(roles): State<RequiredRoles>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(claims) = request.extensions().get::<JwtClaims>() else {
        return Err(AppError::Unauthorized(
            UnauthorizedKind::AuthenticationRequired,
        ));
    };

    if !roles.allows(&claims.role) {
        tracing::info!(user_id = %claims.id, role = %claims.role, "Role not permitted");
        return Err(AppError::insufficient_role(
            Some(claims.role.as_str()),
            roles.as_slice(),
        ));
    }

    Ok(next.run(request).await)
}

/// Authentication settings shared by every domain router.
#[derive(Clone, Debug)]
pub struct RouteAuth {
    pub api_key: ApiKeyConfig,
    pub jwt: JwtAuth,
}

impl RouteAuth {
    pub fn new(api_key: ApiKeyConfig, jwt: JwtAuth) -> Self {
        Self { api_key, jwt }
    }

    /// Require `X-API-Key` on every route of `router`.
    pub fn api_key<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.route_layer(from_fn_with_state(self.api_key.clone(), api_key_middleware))
    }

    /// Require a valid bearer token carrying one of `roles`.
    pub fn roles<S, I, R>(&self, router: Router<S>, roles: I) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        router
            .route_layer(from_fn_with_state(RequiredRoles::new(roles), require_roles))
            .route_layer(from_fn_with_state(self.jwt.clone(), jwt_auth_middleware))
    }
}
