//! Delete Product Use Case

use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, raw_id: &str) -> CatalogResult<()> {
        let product_id = ProductId::parse(raw_id).ok_or(CatalogError::NotFound)?;

        if !self.product_repo.delete(&product_id).await? {
            return Err(CatalogError::NotFound);
        }

        tracing::info!(product_id = %product_id, "Product deleted");
        Ok(())
    }
}
