//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for signing access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Lifetime of an issued access token (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart with this config.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token TTL as a chrono duration
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.token_ttl).unwrap_or(chrono::Duration::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert_eq!(a.token_ttl(), chrono::Duration::days(7));
    }
}
