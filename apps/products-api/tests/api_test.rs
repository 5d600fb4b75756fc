//! End-to-end tests for the assembled application router
//!
//! Each test gets its own data directory with one admin and one editor
//! seeded into `users.json`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::{ApiKeyConfig, CorsConfig, JwtConfig};
use core_config::{Environment, app_info, server::ServerConfig};
use domain_users::hash_password;
use http_body_util::BodyExt;
use products_api::{AppState, Config};
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDataDir, assertions::*};
use tower::ServiceExt; // For oneshot()

const API_KEY: &str = "app-test-api-key";
const SECRET: &str = "app-test-secret-with-at-least-32-chars";

struct TestApp {
    router: Router,
    builder: TestDataBuilder,
    data: TestDataDir,
}

async fn setup(test_name: &str) -> TestApp {
    let data = TestDataDir::new();
    let builder = TestDataBuilder::from_test_name(test_name);

    data.seed(
        "users",
        &json!([
            {
                "id": "admin-1",
                "username": "admin",
                "email": "admin@example.com",
                "password": hash_password("admin123").unwrap(),
                "role": "admin"
            },
            {
                "id": "editor-1",
                "username": "editor",
                "email": "editor@example.com",
                "password": hash_password("editor123").unwrap(),
                "role": "editor"
            }
        ]),
    )
    .await;

    let config = Config {
        app: app_info!(),
        server: ServerConfig::default(),
        environment: Environment::Production,
        api_key: ApiKeyConfig::new(API_KEY),
        jwt: JwtConfig::new(SECRET),
        store: data.config().clone(),
        cors: CorsConfig::default(),
    };

    TestApp {
        router: products_api::app(&AppState::new(config)),
        builder,
        data,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::get(uri)
                .header("x-api-key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Request::post("/api/auth/login")
                    .header("x-api-key", API_KEY)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "email": email, "password": password }).to_string(),
                    ))
                    .unwrap(),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        assert_success(&body)["token"].as_str().unwrap().to_string()
    }

    async fn write(
        &self,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token));
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        };
        self.send(request.unwrap()).await
    }
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = setup("test_product_lifecycle").await;
    let admin = app.login("ADMIN@example.com", "admin123").await;

    let (status, body) = app
        .write("POST", "/api/products", &admin, Some(app.builder.product("lamp")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product created successfully");
    assert_eq!(body["path"], "/api/products");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product retrieved successfully");
    assert_eq!(body["data"]["sku"], app.builder.sku("lamp"));

    let (status, body) = app
        .write(
            "PUT",
            &format!("/api/products/{}", id),
            &admin,
            Some(json!({ "stock": 42 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["data"]["stock"], 42);

    let (status, body) = app
        .write("DELETE", &format!("/api/products/{}", id), &admin, None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.get(&format!("/api/products/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_code(&body, "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Product not found");
    assert_eq!(body["error"]["path"], format!("/api/products/{}", id));

    assert_eq!(app.data.read("products").await, json!([]));
}

#[tokio::test]
async fn test_list_paginates_persisted_products() {
    let app = setup("test_list_paginates_persisted_products").await;
    let editor = app.login("editor@example.com", "editor123").await;

    for i in 0..12 {
        let (status, _) = app
            .write(
                "POST",
                "/api/products",
                &editor,
                Some(app.builder.product(&format!("item{}", i))),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.get("/api/products?page=2&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["sku"], app.builder.sku("item5"));
    assert_eq!(body["pagination"]["total"], 12);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["hasNextPage"], true);
    assert_eq!(body["pagination"]["hasPrevPage"], true);
    assert_eq!(body["path"], "/api/products?page=2&limit=5");
}

#[tokio::test]
async fn test_editor_cannot_delete() {
    let app = setup("test_editor_cannot_delete").await;
    let editor = app.login("editor@example.com", "editor123").await;

    let (status, body) = app
        .write("DELETE", "/api/products/anything", &editor, None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_code(&body, "FORBIDDEN");
}

#[tokio::test]
async fn test_production_hides_internal_details() {
    let app = setup("test_production_hides_internal_details").await;
    tokio::fs::write(app.data.config().collection_path("products"), "{ not json")
        .await
        .unwrap();

    let (status, body) = app.get("/api/products").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_code(&body, "INTERNAL_SERVER_ERROR");
    assert_eq!(body["error"]["details"], json!({}));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup("test_unknown_route").await;

    let (status, body) = app.get("/api/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Endpoint not found");
    assert_eq!(body["error"]["details"]["method"], "GET");
    assert_eq!(body["error"]["details"]["url"], "/api/orders");
}

#[tokio::test]
async fn test_root_endpoints() {
    let app = setup("test_root_endpoints").await;

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::X_CONTENT_TYPE_OPTIONS],
        "nosniff"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let welcome: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(welcome["endpoints"]["products"], "/api/products");
    assert_eq!(welcome["endpoints"]["auth"], "/api/auth");

    let (status, body) = app.send(Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "products_api");

    let (status, body) = app.send(Request::get("/ready").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["storage"]["healthy"], true);
}

#[tokio::test]
async fn test_openapi_lists_both_domains() {
    let app = setup("test_openapi_lists_both_domains").await;

    let (status, body) = app
        .send(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/auth/login").is_some());
    assert!(body["paths"].get("/api/products/{id}").is_some());
}
