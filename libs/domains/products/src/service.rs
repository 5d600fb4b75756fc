//! Product Service - Business logic layer

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductChanges, ProductPage, ProductPayload};
use crate::repository::ProductRepository;
use crate::validation::{Pagination, parse_product};

/// Product service providing business logic operations
///
/// The service layer handles validation, SKU uniqueness and orchestrates
/// repository operations. Writes are serialized so the SKU check and the
/// write that depends on it cannot interleave with another writer.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// One page of products in storage order
    #[instrument(skip(self))]
    pub async fn list_products(&self, pagination: Pagination) -> ProductResult<ProductPage> {
        let all = self.repository.list_all().await?;
        let total = all.len() as u64;

        let products = all
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit as usize)
            .collect();

        Ok(ProductPage {
            products,
            total,
            page: pagination.page,
            limit: pagination.limit,
        })
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, payload))]
    pub async fn create_product(&self, payload: ProductPayload) -> ProductResult<Product> {
        let input = parse_product(&payload).map_err(ProductError::Validation)?;

        let _guard = self.write_lock.lock().await;
        if self.repository.get_by_sku(&input.sku).await?.is_some() {
            return Err(ProductError::DuplicateSku(input.sku));
        }

        let product = self.repository.create(input).await?;
        tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");
        Ok(product)
    }

    /// Update an existing product
    ///
    /// Only fields present in `payload` change, but the product as it would
    /// look afterwards must pass validation as a whole.
    #[instrument(skip(self, payload))]
    pub async fn update_product(&self, id: &str, payload: ProductPayload) -> ProductResult<Product> {
        let _guard = self.write_lock.lock().await;
        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;

        let name = provided(&payload.name);
        let sku = provided(&payload.sku);
        let category = provided(&payload.category);

        if let Some(new_sku) = sku.map(str::trim) {
            if new_sku != existing.sku {
                if let Some(other) = self.repository.get_by_sku(new_sku).await? {
                    if other.id != existing.id {
                        return Err(ProductError::DuplicateSku(new_sku.to_string()));
                    }
                }
            }
        }

        let merged = parse_product(&ProductPayload {
            name: Some(name.unwrap_or(&existing.name).to_string()),
            sku: Some(sku.unwrap_or(&existing.sku).to_string()),
            price: Some(payload.price.clone().unwrap_or_else(|| json!(existing.price))),
            stock: Some(payload.stock.clone().unwrap_or_else(|| json!(existing.stock))),
            category: Some(category.unwrap_or(&existing.category).to_string()),
            description: None,
        })
        .map_err(ProductError::Validation)?;

        let changes = ProductChanges {
            name: name.map(|_| merged.name.clone()),
            sku: sku.map(|_| merged.sku.clone()),
            price: payload.price.is_some().then_some(merged.price),
            stock: payload.stock.is_some().then_some(merged.stock),
            category: category.map(|_| merged.category.clone()),
            description: payload.description.as_deref().map(|d| d.trim().to_string()),
        };

        self.repository
            .update(id, changes)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let _guard = self.write_lock.lock().await;
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id.to_string()));
        }

        self.repository.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

/// `Some` only for non-empty strings; an empty string means "leave unchanged".
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}
