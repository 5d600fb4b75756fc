//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product catalog API backed by JSON files, with API-key and JWT role authorization",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/auth", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Auth", description = "Authentication endpoints")
    )
)]
pub struct ApiDoc;
