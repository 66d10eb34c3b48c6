//! Get Product Use Case

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CatalogError, CatalogResult};

pub struct GetProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> GetProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    /// `raw_id` comes straight from the path; an unparseable id is simply absent
    pub async fn execute(&self, raw_id: &str) -> CatalogResult<Product> {
        let product_id = ProductId::parse(raw_id).ok_or(CatalogError::NotFound)?;

        self.product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}
