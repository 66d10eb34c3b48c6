//! Access Token Issuer
//!
//! Tokens are opaque bearer strings of the form `<token_id>.<signature>`,
//! where the signature is an HMAC-SHA256 of the id under the configured
//! secret. A token is live only while its server-side record exists and has
//! not expired, so revocation is a single delete.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::{access_token::AccessToken, user::User};
use crate::domain::repository::{AccessTokenRepository, UserRepository};
use crate::domain::value_object::user_id::AccessTokenId;
use crate::error::AuthResult;

/// Freshly minted token; `token` is shown to the client once and never stored
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: AccessTokenId,
    pub expires_at: DateTime<Utc>,
}

/// Issues, resolves and revokes bearer tokens
#[trait_variant::make(TokenIssuer: Send)]
pub trait LocalTokenIssuer {
    async fn issue(&self, user: &User) -> AuthResult<IssuedToken>;

    /// Returns the owner of a live token, `None` for anything else
    async fn resolve(&self, token: &str) -> AuthResult<Option<User>>;

    /// Returns false if the token was not live
    async fn revoke(&self, token: &str) -> AuthResult<bool>;
}

/// HMAC-signed tokens backed by an [`AccessTokenRepository`]
pub struct SignedTokenIssuer<U, T>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> Clone for SignedTokenIssuer<U, T>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            user_repo: self.user_repo.clone(),
            token_repo: self.token_repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<U, T> SignedTokenIssuer<U, T>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            token_repo,
            config,
        }
    }

    fn sign(&self, token_id: &AccessTokenId) -> String {
        let signature =
            platform::crypto::hmac_sha256(&self.config.token_secret, token_id.to_string().as_bytes());
        format!("{}.{}", token_id, platform::crypto::to_base64_url(&signature))
    }

    /// Parse and verify token; `None` if malformed or forged
    fn verify(&self, token: &str) -> Option<AccessTokenId> {
        let (id_part, signature_b64) = token.split_once('.')?;

        let signature = platform::crypto::from_base64_url(signature_b64).ok()?;
        if !platform::crypto::verify_hmac_sha256(
            &self.config.token_secret,
            id_part.as_bytes(),
            &signature,
        ) {
            return None;
        }

        AccessTokenId::parse(id_part)
    }

    /// Live token record behind `token`; expired records are removed on sight
    async fn live_record(&self, token: &str) -> AuthResult<Option<AccessToken>> {
        let Some(token_id) = self.verify(token) else {
            return Ok(None);
        };

        let Some(record) = self.token_repo.find_token(&token_id).await? else {
            return Ok(None);
        };

        if record.is_expired() {
            self.token_repo.delete_token(&token_id).await?;
            return Ok(None);
        }

        Ok(Some(record))
    }
}

impl<U, T> TokenIssuer for SignedTokenIssuer<U, T>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: AccessTokenRepository + Clone + Send + Sync + 'static,
{
    async fn issue(&self, user: &User) -> AuthResult<IssuedToken> {
        let record = AccessToken::new(user.user_id, self.config.token_ttl());
        self.token_repo.insert_token(&record).await?;

        tracing::debug!(user_id = %user.user_id, token_id = %record.token_id, "Access token issued");

        Ok(IssuedToken {
            token: self.sign(&record.token_id),
            token_id: record.token_id,
            expires_at: record.expires_at,
        })
    }

    async fn resolve(&self, token: &str) -> AuthResult<Option<User>> {
        let Some(record) = self.live_record(token).await? else {
            return Ok(None);
        };

        self.user_repo.find_by_id(&record.user_id).await
    }

    async fn revoke(&self, token: &str) -> AuthResult<bool> {
        let Some(record) = self.live_record(token).await? else {
            return Ok(false);
        };

        self.token_repo.delete_token(&record.token_id).await
    }
}
