//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod ensure_admin;
pub mod gate;
pub mod login;
pub mod logout;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use ensure_admin::{EnsureAdminInput, EnsureAdminOutcome, EnsureAdminUseCase};
pub use gate::{Gate, GateChain, GateOutcome, Rejection};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use token::{IssuedToken, SignedTokenIssuer, TokenIssuer};
