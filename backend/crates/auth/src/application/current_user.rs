//! Current User Use Case
//!
//! Resolves a bearer token to the user that owns it.

use std::sync::Arc;

use crate::application::token::TokenIssuer;
use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<I>
where
    I: TokenIssuer,
{
    issuer: Arc<I>,
}

impl<I> CurrentUserUseCase<I>
where
    I: TokenIssuer,
{
    pub fn new(issuer: Arc<I>) -> Self {
        Self { issuer }
    }

    /// `Unauthenticated` unless the token is live and its owner still exists
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<User> {
        let token = token.ok_or(AuthError::Unauthenticated)?;

        self.issuer
            .resolve(token)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }

    /// Like `execute`, but a missing identity is `None` instead of an error
    pub async fn optional(&self, token: Option<&str>) -> AuthResult<Option<User>> {
        match token {
            Some(token) => self.issuer.resolve(token).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::token::SignedTokenIssuer;
    use crate::domain::repository::LocalUserRepository;
    use crate::domain::value_object::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    use crate::infra::memory::InMemoryAuthRepository;

    #[tokio::test]
    async fn test_current_user() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let issuer = Arc::new(SignedTokenIssuer::new(
            repo.clone(),
            repo.clone(),
            Arc::new(AuthConfig::development()),
        ));
        let raw = RawPassword::new("password123".into()).unwrap();
        let user = User::new(
            UserName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        LocalUserRepository::create(repo.as_ref(), &user).await.unwrap();
        let issued = issuer.issue(&user).await.unwrap();

        let uc = CurrentUserUseCase::new(issuer);
        let found = uc.execute(Some(issued.token.as_str())).await.unwrap();
        assert_eq!(found.user_id, user.user_id);

        assert!(matches!(uc.execute(None).await, Err(AuthError::Unauthenticated)));
        assert!(matches!(
            uc.execute(Some("nope")).await,
            Err(AuthError::Unauthenticated)
        ));
        assert!(uc.optional(None).await.unwrap().is_none());
    }
}
