//! Auth Middleware
//!
//! Runs a [`GateChain`] in front of protected routes and hands the resolved
//! identity to handlers through the [`CurrentUser`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::gate::{GateChain, GateOutcome};
use crate::application::token::TokenIssuer;
use crate::application::CurrentUserUseCase;
use crate::domain::entity::user::User;
use crate::error::AuthError;

/// Middleware state
pub struct GateState<I>
where
    I: TokenIssuer + Send + Sync + 'static,
{
    pub issuer: Arc<I>,
    pub chain: Arc<GateChain>,
}

impl<I> GateState<I>
where
    I: TokenIssuer + Send + Sync + 'static,
{
    pub fn new(issuer: Arc<I>, chain: GateChain) -> Self {
        Self {
            issuer,
            chain: Arc::new(chain),
        }
    }
}

impl<I> Clone for GateState<I>
where
    I: TokenIssuer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            issuer: self.issuer.clone(),
            chain: self.chain.clone(),
        }
    }
}

/// Middleware that evaluates the gate chain
///
/// Use with `axum::middleware::from_fn_with_state`. The first rejecting
/// gate answers the request; the inner service is not called.
pub async fn enforce_gates<I>(
    State(state): State<GateState<I>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    I: TokenIssuer + Send + Sync + 'static,
{
    let token = platform::bearer::extract_bearer_token(req.headers());

    let user = CurrentUserUseCase::new(state.issuer.clone())
        .optional(token.as_deref())
        .await?;

    if let GateOutcome::Reject(rejection) = state.chain.evaluate(user.as_ref()) {
        return Err(rejection.into());
    }

    if let Some(user) = user {
        req.extensions_mut().insert(CurrentUser(user));
    }

    Ok(next.run(req).await)
}

/// The authenticated user of this request
///
/// Only available behind [`enforce_gates`] with an `Authenticated` gate;
/// elsewhere extraction fails with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
