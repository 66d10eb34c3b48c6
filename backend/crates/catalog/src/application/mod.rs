//! Application Layer
//!
//! Use cases for the product catalog.

pub mod create_product;
pub mod delete_product;
pub mod fields;
pub mod get_product;
pub mod list_products;
pub mod update_product;

// Re-exports
pub use create_product::CreateProductUseCase;
pub use delete_product::DeleteProductUseCase;
pub use fields::{ProductFields, ValidProduct};
pub use get_product::GetProductUseCase;
pub use list_products::ListProductsUseCase;
pub use update_product::UpdateProductUseCase;
