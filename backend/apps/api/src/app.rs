//! Router assembly
//!
//! Kept separate from `main` so the whole HTTP surface can be driven in
//! tests over in-memory repositories.

use std::sync::Arc;

use auth::AuthConfig;
use auth::application::token::TokenIssuer;
use auth::middleware::{GateChain, GateState, enforce_gates};
use auth::store::UserRepository;
use axum::{Router, middleware};
use catalog::store::ProductRepository;

/// Everything the router needs, generic over storage
pub struct AppParts<R, I, P> {
    pub users: Arc<R>,
    pub issuer: Arc<I>,
    pub products: Arc<P>,
    pub auth_config: Arc<AuthConfig>,
}

/// Build the API router
///
/// - `/register`, `/login`, `/logout`, `/userInfo` from `auth`
/// - `/products*` from `catalog`, behind the admin gate chain
pub fn build_router<R, I, P>(parts: AppParts<R, I, P>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
    P: ProductRepository + Clone + Send + Sync + 'static,
{
    let admin_gate = GateState::new(parts.issuer.clone(), GateChain::admin());

    let products = catalog::catalog_router_generic(parts.products)
        .route_layer(middleware::from_fn_with_state(admin_gate, enforce_gates::<I>));

    auth::auth_router_generic(parts.users, parts.issuer, parts.auth_config).merge(products)
}
