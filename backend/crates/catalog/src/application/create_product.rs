//! Create Product Use Case

use std::sync::Arc;

use crate::application::fields::ProductFields;
use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

pub struct CreateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, fields: ProductFields) -> CatalogResult<Product> {
        let valid = fields.validate_all()?;

        let product = Product::new(valid.name, valid.description, valid.price, valid.stock);
        self.product_repo.create(&product).await?;

        tracing::info!(
            product_id = %product.product_id,
            price = %product.price,
            stock = %product.stock,
            "Product created"
        );

        Ok(product)
    }
}
