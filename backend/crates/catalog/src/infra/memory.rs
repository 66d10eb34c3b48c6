//! In-memory repository, used by the use-case and router tests

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::CatalogResult;

/// Insertion-ordered; clones share the same state
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn create(&self, product: &Product) -> CatalogResult<()> {
        self.products.write().await.push(product.clone());
        Ok(())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| &p.product_id == product_id)
            .cloned())
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.product_id == product.product_id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| &p.product_id != product_id);
        Ok(products.len() < before)
    }

    async fn count(&self) -> CatalogResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }
}
