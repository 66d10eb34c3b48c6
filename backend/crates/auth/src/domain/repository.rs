//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::value_object::{
    email::Email,
    user_id::{AccessTokenId, UserId},
};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user. Fails with `EmailTaken` if the email is in use.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Access token repository trait
#[trait_variant::make(AccessTokenRepository: Send)]
pub trait LocalAccessTokenRepository {
    async fn insert_token(&self, token: &AccessToken) -> AuthResult<()>;

    async fn find_token(&self, token_id: &AccessTokenId) -> AuthResult<Option<AccessToken>>;

    /// Returns false if no such token existed
    async fn delete_token(&self, token_id: &AccessTokenId) -> AuthResult<bool>;

    /// Clean up expired tokens
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
