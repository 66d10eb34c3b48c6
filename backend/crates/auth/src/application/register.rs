//! Register Use Case
//!
//! Creates a new user account and logs it in.

use std::sync::Arc;

use kernel::error::validation::ValidationErrors;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenIssuer};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

const CONFIRMATION_MISMATCH: &str = "The password confirmation does not match.";

/// Register input. A missing field is `None`.
#[derive(Default)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: IssuedToken,
}

/// Register use case
pub struct RegisterUseCase<U, I>
where
    U: UserRepository,
    I: TokenIssuer,
{
    user_repo: Arc<U>,
    issuer: Arc<I>,
    config: Arc<AuthConfig>,
}

impl<U, I> RegisterUseCase<U, I>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let mut errors = ValidationErrors::new();

        let user_name = errors.check("name", UserName::new(input.name.unwrap_or_default()));
        let email = errors.check("email", Email::new(input.email.unwrap_or_default()));
        let password = errors.check("password", RawPassword::new(input.password.unwrap_or_default()));

        if let Some(password) = &password {
            let confirmed = input
                .password_confirmation
                .as_deref()
                .is_some_and(|c| password.confirms(c));
            if !confirmed {
                errors.add("password", CONFIRMATION_MISMATCH);
            }
        }

        // Uniqueness only matters once the email itself is well-formed
        if let Some(email) = &email {
            if self.user_repo.exists_by_email(email).await? {
                errors.add("email", AuthError::EmailTaken.to_string());
            }
        }

        let (Some(user_name), Some(email), Some(password)) = (user_name, email, password) else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;

        // role is never taken from input
        let user = User::new(user_name, email, password_hash);

        // Persist. A concurrent registration surfaces here as EmailTaken.
        self.user_repo.create(&user).await?;

        let token = self.issuer.issue(&user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::token::SignedTokenIssuer;
    use crate::domain::value_object::user_role::UserRole;
    use crate::infra::memory::InMemoryAuthRepository;

    type Issuer = SignedTokenIssuer<InMemoryAuthRepository, InMemoryAuthRepository>;

    fn use_case() -> (RegisterUseCase<InMemoryAuthRepository, Issuer>, Arc<InMemoryAuthRepository>) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        let issuer = Arc::new(SignedTokenIssuer::new(repo.clone(), repo.clone(), config.clone()));
        (RegisterUseCase::new(repo.clone(), issuer, config), repo)
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput {
            name: Some("Alice".into()),
            email: Some(email.into()),
            password: Some("password123".into()),
            password_confirmation: Some("password123".into()),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let (uc, repo) = use_case();
        let out = uc.execute(input("Alice@Example.com")).await.unwrap();

        assert_eq!(out.user.email.as_str(), "alice@example.com");
        assert_eq!(out.user.user_role, UserRole::User);
        assert!(!out.token.token.is_empty());
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let (uc, repo) = use_case();
        uc.execute(input("alice@example.com")).await.unwrap();

        let err = uc.execute(input("ALICE@example.com")).await.unwrap_err();
        match err {
            AuthError::Validation(errors) => {
                assert_eq!(errors.messages("email"), ["The email has already been taken."]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(repo.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_all_field_errors_reported() {
        let (uc, repo) = use_case();
        let err = uc.execute(RegisterInput::default()).await.unwrap_err();

        let AuthError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert!(errors.has("name"));
        assert!(errors.has("email"));
        assert!(errors.has("password"));
        assert_eq!(repo.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_confirmation_mismatch() {
        let (uc, _) = use_case();
        let mut bad = input("bob@example.com");
        bad.password_confirmation = Some("password124".into());

        let AuthError::Validation(errors) = uc.execute(bad).await.unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(errors.messages("password"), [CONFIRMATION_MISMATCH]);
        assert!(!errors.has("email"));
    }

    #[tokio::test]
    async fn test_missing_confirmation() {
        let (uc, _) = use_case();
        let mut bad = input("bob@example.com");
        bad.password_confirmation = None;

        assert!(matches!(
            uc.execute(bad).await,
            Err(AuthError::Validation(_))
        ));
    }
}
