use async_trait::async_trait;
use database::{Record, RecordStore, from_record, to_record};
use serde_json::Value;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductChanges};

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends; the service only
/// depends on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in storage order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Get a product by exact SKU
    async fn get_by_sku(&self, sku: &str) -> ProductResult<Option<Product>>;

    /// Create a new product
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Apply `changes` to an existing product. `None` when the id is unknown.
    async fn update(&self, id: &str, changes: ProductChanges) -> ProductResult<Option<Product>>;

    /// Delete a product by ID
    async fn delete(&self, id: &str) -> ProductResult<bool>;
}

/// [`ProductRepository`] over any [`RecordStore`] collection
#[derive(Clone)]
pub struct StoreProductRepository<S> {
    store: S,
}

impl<S: RecordStore> StoreProductRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn decode(record: Record) -> ProductResult<Product> {
        Ok(from_record(record)?)
    }
}

#[async_trait]
impl<S: RecordStore> ProductRepository for StoreProductRepository<S> {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        self.store
            .read_all()
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        self.store
            .find_by_id(id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    async fn get_by_sku(&self, sku: &str) -> ProductResult<Option<Product>> {
        let mut criteria = Record::new();
        criteria.insert("sku".to_string(), Value::String(sku.to_string()));

        self.store
            .find_one(&criteria)
            .await?
            .map(Self::decode)
            .transpose()
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        let record = self.store.create(to_record(&input)?).await?;
        Self::decode(record)
    }

    async fn update(&self, id: &str, changes: ProductChanges) -> ProductResult<Option<Product>> {
        self.store
            .update(id, to_record(&changes)?)
            .await?
            .map(Self::decode)
            .transpose()
    }

    async fn delete(&self, id: &str) -> ProductResult<bool> {
        Ok(self.store.delete(id).await?)
    }
}
