//! Login Use Case
//!
//! Verifies credentials and issues a new access token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenIssuer};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Login use case
///
/// Every failure (missing field, malformed email, unknown email, wrong
/// password) is the same `InvalidCredentials`.
pub struct LoginUseCase<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    user_repo: Arc<U>,
    issuer: Arc<I>,
    config: Arc<AuthConfig>,
}

impl<U, I> LoginUseCase<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    pub fn new(user_repo: Arc<U>, issuer: Arc<I>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(AuthError::InvalidCredentials);
        };

        let email = Email::new(email).map_err(|_| AuthError::InvalidCredentials)?;
        let password = RawPassword::for_login(password);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user).await?;

        tracing::info!(user_id = %user.user_id, token_id = %token.token_id, "User logged in");

        Ok(LoginOutput { user, token })
    }
}
