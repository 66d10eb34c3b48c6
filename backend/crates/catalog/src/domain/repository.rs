//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::product::Product;
use crate::domain::value_object::product_id::ProductId;
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, oldest first
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    async fn create(&self, product: &Product) -> CatalogResult<()>;

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Returns false if the product no longer exists
    async fn update(&self, product: &Product) -> CatalogResult<bool>;

    /// Returns false if no such product existed
    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool>;

    async fn count(&self) -> CatalogResult<u64>;
}
