//! Access Token Entity
//!
//! Server-side record behind a bearer token. The secret part of the token
//! is never stored; only the id it was issued for.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::user_id::{AccessTokenId, UserId};

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token_id: AccessTokenId,
    /// Owner of the token
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AccessToken {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            token_id: AccessTokenId::new(),
            user_id,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
