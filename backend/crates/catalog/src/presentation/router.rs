//! Catalog Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgProductRepository) -> Router {
    catalog_router_generic(Arc::new(repo))
}

/// Create a generic Catalog router for any repository implementation
///
/// Routes are unguarded; callers attach the access gate with `route_layer`.
pub fn catalog_router_generic<P>(repo: Arc<P>) -> Router
where
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState { repo };

    Router::new()
        .route(
            "/products",
            get(handlers::list_products::<P>).post(handlers::create_product::<P>),
        )
        .route(
            "/products/{id}",
            get(handlers::show_product::<P>)
                .put(handlers::update_product::<P>)
                .patch(handlers::update_product::<P>)
                .delete(handlers::delete_product::<P>),
        )
        .with_state(state)
}
