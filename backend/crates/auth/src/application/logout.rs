//! Logout Use Case
//!
//! Revokes the presenting token. Other tokens of the same user stay live.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<I>
where
    I: TokenIssuer,
{
    issuer: Arc<I>,
}

impl<I> LogoutUseCase<I>
where
    I: TokenIssuer,
{
    pub fn new(issuer: Arc<I>) -> Self {
        Self { issuer }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<()> {
        let token = token.ok_or(AuthError::NotLoggedIn)?;

        if !self.issuer.revoke(token).await? {
            return Err(AuthError::NotLoggedIn);
        }

        tracing::info!("User logged out");
        Ok(())
    }
}
