//! List Products Use Case

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;

pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.product_repo.list().await
    }
}
