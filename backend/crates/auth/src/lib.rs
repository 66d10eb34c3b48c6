//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, gate middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Opaque bearer tokens, revocable one at a time
//! - Role-based access (User, Admin) through an ordered gate chain
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Tokens are HMAC-signed ids of a server-side record
//! - Login failures are indistinguishable from each other

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::{AccessTokenRepository, UserRepository};
    pub use crate::infra::memory::InMemoryAuthRepository as MemoryAuthStore;
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::application::gate::{Gate, GateChain, GateOutcome, Rejection};
    pub use crate::presentation::middleware::*;
}

pub mod token {
    pub use crate::application::token::*;
}
