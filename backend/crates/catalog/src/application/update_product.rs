//! Update Product Use Case
//!
//! Partial update. Fields are validated before the product is looked up, so
//! an invalid body is reported even for an unknown id.

use std::sync::Arc;

use crate::application::fields::ProductFields;
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

pub struct UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, raw_id: &str, fields: ProductFields) -> CatalogResult<Product> {
        let changes = fields.validate_changes()?;

        let product_id = ProductId::parse(raw_id).ok_or(CatalogError::NotFound)?;
        let mut product = self
            .product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        if changes.is_empty() {
            return Ok(product);
        }

        product.apply(changes);

        // deleted between lookup and write
        if !self.product_repo.update(&product).await? {
            return Err(CatalogError::NotFound);
        }

        tracing::info!(product_id = %product.product_id, "Product updated");

        Ok(product)
    }
}
