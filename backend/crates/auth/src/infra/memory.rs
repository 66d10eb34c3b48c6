//! In-memory repository
//!
//! Backs the use-case and router tests. Enforces the unique email
//! constraint the same way the `users` table does.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    user_id::{AccessTokenId, UserId},
};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    tokens: HashMap<AccessTokenId, AccessToken>,
}

/// Cheap to clone; clones share the same state
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn token_count(&self) -> usize {
        self.state.read().await.tokens.len()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        state.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.state.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.state.read().await.users.values().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.users.get_mut(&user.user_id) {
            *existing = user.clone();
        }
        Ok(())
    }
}

impl AccessTokenRepository for InMemoryAuthRepository {
    async fn insert_token(&self, token: &AccessToken) -> AuthResult<()> {
        self.state
            .write()
            .await
            .tokens
            .insert(token.token_id, token.clone());
        Ok(())
    }

    async fn find_token(&self, token_id: &AccessTokenId) -> AuthResult<Option<AccessToken>> {
        Ok(self.state.read().await.tokens.get(token_id).cloned())
    }

    async fn delete_token(&self, token_id: &AccessTokenId) -> AuthResult<bool> {
        Ok(self.state.write().await.tokens.remove(token_id).is_some())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut state = self.state.write().await;
        let before = state.tokens.len();
        state.tokens.retain(|_, t| t.expires_at > now);
        Ok((before - state.tokens.len()) as u64)
    }
}
