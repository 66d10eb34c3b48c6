//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::gate::GateChain;
use crate::application::token::{SignedTokenIssuer, TokenIssuer};
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{GateState, enforce_gates};

/// Token issuer used by the PostgreSQL-backed router
pub type PgTokenIssuer = SignedTokenIssuer<PgAuthRepository, PgAuthRepository>;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    let repo = Arc::new(repo);
    let config = Arc::new(config);
    let issuer = Arc::new(PgTokenIssuer::new(repo.clone(), repo.clone(), config.clone()));

    auth_router_generic(repo, issuer, config)
}

/// Create a generic Auth router for any repository and token issuer
///
/// The issuer is shared so that other route groups can gate on the same
/// tokens.
pub fn auth_router_generic<R, I>(repo: Arc<R>, issuer: Arc<I>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    I: TokenIssuer + Clone + Send + Sync + 'static,
{
    let gate = GateState::new(issuer.clone(), GateChain::authenticated());

    let state = AuthAppState {
        repo,
        issuer,
        config,
    };

    let protected = Router::new()
        .route("/userInfo", get(handlers::user_info))
        .route_layer(middleware::from_fn_with_state(gate, enforce_gates::<I>));

    Router::new()
        .route("/register", post(handlers::register::<R, I>))
        .route("/login", post(handlers::login::<R, I>))
        .route("/logout", post(handlers::logout::<R, I>))
        .with_state(state)
        .merge(protected)
}
