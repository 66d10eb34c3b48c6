//! Ensure Admin Use Case
//!
//! No endpoint can create an administrator. The server bootstraps one from
//! configuration at startup: a missing account is created, an existing one
//! is promoted. The stored password of an existing account is left alone.

use std::sync::Arc;

use kernel::error::validation::ValidationErrors;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::AuthResult;

pub struct EnsureAdminInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureAdminOutcome {
    Created,
    Promoted,
    AlreadyAdmin,
}

pub struct EnsureAdminUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> EnsureAdminUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: EnsureAdminInput) -> AuthResult<EnsureAdminOutcome> {
        let mut errors = ValidationErrors::new();
        let email = errors.check("email", Email::new(input.email));
        let user_name = errors.check("name", UserName::new(input.name));
        let (Some(email), Some(user_name)) = (email, user_name) else {
            return Err(errors.into());
        };

        if let Some(mut user) = self.user_repo.find_by_email(&email).await? {
            if user.is_admin() {
                return Ok(EnsureAdminOutcome::AlreadyAdmin);
            }
            user.set_role(UserRole::Admin);
            self.user_repo.update(&user).await?;
            tracing::info!(user_id = %user.user_id, "Existing user promoted to admin");
            return Ok(EnsureAdminOutcome::Promoted);
        }

        let password = RawPassword::new(input.password)
            .map_err(|e| ValidationErrors::single("password", e.to_string()))?;
        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;

        let mut user = User::new(user_name, email, password_hash);
        user.set_role(UserRole::Admin);
        self.user_repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "Admin user created");
        Ok(EnsureAdminOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAuthRepository;

    fn input() -> EnsureAdminInput {
        EnsureAdminInput {
            name: "Admin".into(),
            email: "admin@example.com".into(),
            password: "adminpass123".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_idempotent() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let uc = EnsureAdminUseCase::new(repo.clone(), Arc::new(AuthConfig::development()));

        assert_eq!(uc.execute(input()).await.unwrap(), EnsureAdminOutcome::Created);
        assert_eq!(uc.execute(input()).await.unwrap(), EnsureAdminOutcome::AlreadyAdmin);
        assert_eq!(repo.user_count().await, 1);

        let email = Email::new("admin@example.com").unwrap();
        let admin = repo.find_by_email(&email).await.unwrap().unwrap();
        assert!(admin.is_admin());
    }

    #[tokio::test]
    async fn test_promotes_existing_user() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let raw = RawPassword::new("userpass123".into()).unwrap();
        let user = User::new(
            UserName::new("Someone").unwrap(),
            Email::new("admin@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        repo.create(&user).await.unwrap();

        let uc = EnsureAdminUseCase::new(repo.clone(), Arc::new(AuthConfig::development()));
        assert_eq!(uc.execute(input()).await.unwrap(), EnsureAdminOutcome::Promoted);

        let promoted = repo.find_by_id(&user.user_id).await.unwrap().unwrap();
        assert!(promoted.is_admin());
        // existing credentials are kept
        assert!(promoted.password.verify(&RawPassword::for_login("userpass123".into()), None));
    }
}
