use axum::{
    Router,
    extract::{OriginalUri, State},
    routing::post,
};
use axum_helpers::{
    ApiJson, ApiResponse, RouteAuth,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, UnauthorizedResponse},
    request_path,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AuthResult;
use crate::models::{LoginRequest, LoginResponse, UserProfile};
use crate::repository::UserRepository;
use crate::service::AuthService;

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(login),
    components(
        schemas(LoginRequest, LoginResponse, UserProfile),
        responses(BadRequestResponse, UnauthorizedResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints")
    )
)]
pub struct ApiDoc;

/// Create the auth router; every route requires `X-API-Key`
pub fn router<R: UserRepository + 'static>(service: AuthService<R>, auth: &RouteAuth) -> Router {
    let shared_service = Arc::new(service);

    auth.api_key(Router::new().route("/login", post(login::<R>)))
        .with_state(shared_service)
}

/// Exchange email and password for a JWT
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<AuthService<R>>>,
    OriginalUri(uri): OriginalUri,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AuthResult<ApiResponse<LoginResponse>> {
    let response = service.login(request).await?;
    Ok(ApiResponse::success(
        response,
        "Login successful",
        request_path(&uri),
    ))
}
