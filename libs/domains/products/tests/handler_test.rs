//! Handler tests for Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Envelope shapes and status codes
//! - Per-route authentication (API key for reads, roles for writes)
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the products router, without the
//! application-wide middleware stack.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ApiKeyConfig, JwtAuth, JwtConfig, RouteAuth};
use database::InMemoryStore;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, assertions::*};
use tower::ServiceExt; // For oneshot()

const API_KEY: &str = "test-api-key";
const SECRET: &str = "handler-tests-secret-at-least-32-chars";

fn auth() -> RouteAuth {
    RouteAuth::new(ApiKeyConfig::new(API_KEY), JwtAuth::new(&JwtConfig::new(SECRET)))
}

fn app() -> Router {
    let service = ProductService::new(StoreProductRepository::new(InMemoryStore::new(COLLECTION)));
    handlers::router(service, &auth())
}

fn bearer(role: &str) -> String {
    let token = auth()
        .jwt
        .issue("user-1", "user@example.com", role)
        .unwrap();
    format!("Bearer {}", token)
}

fn request(method: &str, uri: &str, headers: &[(&str, &str)], body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

// Helper to parse JSON response body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create(app: &Router, body: Value) -> Value {
    let editor = bearer("editor");
    let (status, body) = send(
        app,
        request("POST", "/", &[("authorization", &editor)], Some(body)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body
}

#[tokio::test]
async fn test_create_product_handler_returns_201() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let body = create(&app, builder.product("main")).await;

    assert_eq!(body["message"], "Product created successfully");
    let data = assert_success(&body);
    assert_eq!(data["sku"], builder.sku("main"));
    assert!(data["id"].is_string());
    assert!(data["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_create_product_handler_validates_input() {
    let app = app();
    let editor = bearer("editor");

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/",
            &[("authorization", &editor)],
            Some(json!({ "name": "ab", "sku": "12345", "price": 10, "stock": 0, "category": "x" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_code(&body, "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Validation failed");
    assert_eq!(
        body["error"]["details"],
        json!({ "name": "Name must be at least 3 characters long" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app();
    let editor = bearer("editor");
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("authorization", &editor)
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_code(&body, "BAD_REQUEST");
}

#[tokio::test]
async fn test_duplicate_sku_returns_409() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_conflict");
    create(&app, builder.product("main")).await;

    let editor = bearer("admin");
    let (status, body) = send(
        &app,
        request("POST", "/", &[("authorization", &editor)], Some(builder.product("main"))),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_code(&body, "CONFLICT");
    assert_eq!(body["error"]["message"], "Product with this SKU already exists");
}

#[tokio::test]
async fn test_reads_require_api_key() {
    let app = app();

    let (status, body) = send(&app, request("GET", "/", &[], None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_code(&body, "API_KEY_MISSING");

    let (status, body) = send(&app, request("GET", "/", &[("x-api-key", "wrong")], None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_code(&body, "INVALID_API_KEY");
}

#[tokio::test]
async fn test_list_products_paginates() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_list");
    for i in 0..25 {
        create(&app, builder.product(&format!("p{:02}", i))).await;
    }

    let (status, body) = send(
        &app,
        request("GET", "/?page=3&limit=10", &[("x-api-key", API_KEY)], None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["pagination"],
        json!({
            "page": 3,
            "limit": 10,
            "total": 25,
            "totalPages": 3,
            "hasNextPage": false,
            "hasPrevPage": true
        })
    );
    assert_eq!(body["path"], "/?page=3&limit=10");
}

#[tokio::test]
async fn test_list_products_tolerates_junk_query() {
    let app = app();

    let (status, body) = send(
        &app,
        request("GET", "/?page=abc&limit=500", &[("x-api-key", API_KEY)], None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 100);
}

#[tokio::test]
async fn test_get_product_found_and_missing() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_get");
    let created = create(&app, builder.product("main")).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        request("GET", &format!("/{}", id), &[("x-api-key", API_KEY)], None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product retrieved successfully");
    assert_eq!(body["data"], created["data"]);

    let (status, body) = send(
        &app,
        request("GET", "/does-not-exist", &[("x-api-key", API_KEY)], None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Product not found");
}

#[tokio::test]
async fn test_writes_require_role() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_roles");

    let (status, body) = send(&app, request("POST", "/", &[], Some(builder.product("a")))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_code(&body, "TOKEN_MISSING");

    let viewer = bearer("viewer");
    let (status, body) = send(
        &app,
        request("POST", "/", &[("authorization", &viewer)], Some(builder.product("a"))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["details"]["requiredRoles"], json!(["editor", "admin"]));

    // API key alone does not authorize writes
    let (status, _) = send(
        &app,
        request("POST", "/", &[("x-api-key", API_KEY)], Some(builder.product("a"))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_product_handler() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_update");
    let created = create(&app, builder.product("main")).await;
    let id = created["data"]["id"].as_str().unwrap();

    let editor = bearer("editor");
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/{}", id),
            &[("authorization", &editor)],
            Some(json!({ "stock": 42, "description": "  Restocked " })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["data"]["stock"], 42);
    assert_eq!(body["data"]["description"], "Restocked");
    assert_eq!(body["data"]["name"], created["data"]["name"]);
}

#[tokio::test]
async fn test_delete_requires_admin_and_returns_204() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_delete");
    let created = create(&app, builder.product("main")).await;
    let uri = format!("/{}", created["data"]["id"].as_str().unwrap());

    let editor = bearer("editor");
    let (status, _) = send(&app, request("DELETE", &uri, &[("authorization", &editor)], None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = bearer("admin");
    let (status, body) = send(&app, request("DELETE", &uri, &[("authorization", &admin)], None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, request("GET", &uri, &[("x-api-key", API_KEY)], None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
