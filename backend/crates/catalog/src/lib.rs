//! Catalog (Product) Backend Module
//!
//! Same layering as `auth`:
//! - `domain/` - Product entity, field value objects, repository trait
//! - `application/` - Use cases (list, create, get, update, delete)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The router carries no access control of its own. The API binary wraps it
//! in the admin gate from `auth`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryProductRepository, postgres::PgProductRepository};
pub use presentation::router::{catalog_router, catalog_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::ProductRepository;
    pub use crate::infra::memory::InMemoryProductRepository as MemoryProductStore;
    pub use crate::infra::postgres::PgProductRepository as ProductStore;
}
