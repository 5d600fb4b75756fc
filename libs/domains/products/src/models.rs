use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::{check_category, check_name, check_price, check_sku, check_stock};

/// Product entity as stored in the `products` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier
    pub id: String,
    pub name: String,
    /// Stock Keeping Unit, unique across all products (case-sensitive)
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "database::iso8601")]
    #[schema(value_type = String, example = "2024-05-01T10:00:00.000Z")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "database::iso8601")]
    #[schema(value_type = String, example = "2024-05-01T10:00:00.000Z")]
    pub updated_at: DateTime<Utc>,
}

/// Request body for create and update.
///
/// Every field is optional at the wire level; the `validate` rules decide
/// what is acceptable. `price` and `stock` accept JSON numbers or numeric
/// strings.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProductPayload {
    #[validate(required(message = "Name is required"), custom(function = "check_name"))]
    #[schema(example = "Standing Desk")]
    pub name: Option<String>,
    #[validate(required(message = "SKU is required"), custom(function = "check_sku"))]
    #[schema(example = "DESK-001")]
    pub sku: Option<String>,
    #[validate(required(message = "Price is required"), custom(function = "check_price"))]
    #[schema(value_type = Option<f64>, example = 499.9)]
    pub price: Option<Value>,
    #[validate(required(message = "Stock is required"), custom(function = "check_stock"))]
    #[schema(value_type = Option<i64>, example = 12)]
    pub stock: Option<Value>,
    #[validate(
        required(message = "Category is required"),
        custom(function = "check_category")
    )]
    #[schema(example = "Furniture")]
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Normalized fields of a new product (strings trimmed, numbers coerced)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub description: String,
}

/// Fields to change on update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One page of products plus the numbers needed for pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Query parameters for listing products.
///
/// Kept as raw strings so that junk values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number (default 1)
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
    /// Items per page (default 10, max 100)
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
}
