//! HTTP handlers for Products API

use axum::{
    Router,
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    ApiJson, ApiResponse, PaginatedResponse, RouteAuth,
    errors::responses::{
        BadRequestResponse, ConflictResponse, ForbiddenResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse, ValidationErrorResponse,
    },
    request_path,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{ListQuery, Product, ProductPayload};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::validate_pagination;

/// Roles allowed to create and update products
pub const WRITE_ROLES: [&str; 2] = ["editor", "admin"];
/// Roles allowed to delete products
pub const DELETE_ROLES: [&str; 1] = ["admin"];

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductPayload),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            ValidationErrorResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
///
/// Reads require `X-API-Key`; create/update need a bearer token with role
/// `editor` or `admin`; delete needs `admin`.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: &RouteAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let reads = auth.api_key(
        Router::new()
            .route("/", get(list_products::<R>))
            .route("/{id}", get(get_product::<R>)),
    );

    let writes = auth.roles(
        Router::new()
            .route("/", post(create_product::<R>))
            .route("/{id}", put(update_product::<R>)),
        WRITE_ROLES,
    );

    let deletes = auth.roles(
        Router::new().route("/{id}", delete(delete_product::<R>)),
        DELETE_ROLES,
    );

    reads.merge(writes).merge(deletes).with_state(shared_service)
}

/// List products, one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated list of products", body = PaginatedResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> ProductResult<PaginatedResponse<Product>> {
    let pagination = validate_pagination(query.page.as_deref(), query.limit.as_deref());
    let page = service.list_products(pagination).await?;

    Ok(PaginatedResponse::new(
        page.products,
        page.page,
        page.limit,
        page.total,
        request_path(&uri),
    ))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(product, "Product created successfully", request_path(&uri)),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.get_product(&id).await?;
    Ok(ApiResponse::success(
        product,
        "Product retrieved successfully",
        request_path(&uri),
    ))
}

/// Update a product; only the fields present in the body change
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ProductPayload>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.update_product(&id, payload).await?;
    Ok(ApiResponse::success(
        product,
        "Product updated successfully",
        request_path(&uri),
    ))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
