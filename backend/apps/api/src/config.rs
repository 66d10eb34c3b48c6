//! Server configuration
//!
//! Read from the environment (optionally seeded from `.env`).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::EnsureAdminInput;
use base64::Engine;
use base64::engine::general_purpose;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: u64 = 7 * 24 * 3600;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    /// Administrator to create or promote at startup
    pub admin: Option<EnsureAdminInput>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let token_secret = match lookup("AUTH_TOKEN_SECRET") {
            Some(secret_b64) => decode_secret(&secret_b64)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::with_random_secret().token_secret
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };

        let token_ttl_secs = match lookup("AUTH_TOKEN_TTL_SECS") {
            Some(v) => v
                .parse()
                .context("AUTH_TOKEN_TTL_SECS must be a number of seconds")?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let auth = AuthConfig {
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            password_pepper: lookup("PASSWORD_PEPPER").map(String::into_bytes),
        };

        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(EnsureAdminInput {
                name: lookup("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                email,
                password,
            }),
            (None, None) => None,
            _ => bail!("ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
            admin,
        })
    }
}

/// Base64 (standard alphabet) of exactly 32 bytes
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("AUTH_TOKEN_SECRET must be base64")?;

    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("AUTH_TOKEN_SECRET must decode to 32 bytes, got {len}"))
}
