//! Access Gates
//!
//! A route is protected by an ordered chain of gates. Each gate either lets
//! the request continue or rejects it; the first rejection wins and later
//! gates are not consulted.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_role::UserRole;
use crate::error::AuthError;

/// A single access condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Request must carry a live bearer token
    Authenticated,
    /// Resolved user must hold at least this role
    Role(UserRole),
}

/// Why a gate refused the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Continue,
    Reject(Rejection),
}

impl Gate {
    pub fn check(&self, user: Option<&User>) -> GateOutcome {
        match (self, user) {
            (_, None) => GateOutcome::Reject(Rejection::Unauthenticated),
            (Gate::Authenticated, Some(_)) => GateOutcome::Continue,
            (Gate::Role(required), Some(user)) if user.user_role.satisfies(*required) => {
                GateOutcome::Continue
            }
            (Gate::Role(_), Some(_)) => GateOutcome::Reject(Rejection::Forbidden),
        }
    }
}

impl From<Rejection> for AuthError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Unauthenticated => AuthError::Unauthenticated,
            Rejection::Forbidden => AuthError::Forbidden,
        }
    }
}

/// Ordered list of gates guarding a route group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateChain {
    gates: Vec<Gate>,
}

impl GateChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any logged-in user
    pub fn authenticated() -> Self {
        Self::new().then(Gate::Authenticated)
    }

    /// Logged-in administrators only
    pub fn admin() -> Self {
        Self::authenticated().then(Gate::Role(UserRole::Admin))
    }

    pub fn then(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Run the gates in order, stopping at the first rejection
    pub fn evaluate(&self, user: Option<&User>) -> GateOutcome {
        self.gates
            .iter()
            .map(|gate| gate.check(user))
            .find(|outcome| *outcome != GateOutcome::Continue)
            .unwrap_or(GateOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };

    fn user(role: UserRole) -> User {
        let raw = RawPassword::new("password123".into()).unwrap();
        let mut user = User::new(
            UserName::new("Gate Tester").unwrap(),
            Email::new("gate@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        );
        user.set_role(role);
        user
    }

    #[test]
    fn test_empty_chain_continues() {
        assert_eq!(GateChain::new().evaluate(None), GateOutcome::Continue);
    }

    #[test]
    fn test_authenticated_chain() {
        let chain = GateChain::authenticated();
        assert_eq!(
            chain.evaluate(None),
            GateOutcome::Reject(Rejection::Unauthenticated)
        );
        assert_eq!(
            chain.evaluate(Some(&user(UserRole::User))),
            GateOutcome::Continue
        );
    }

    #[test]
    fn test_admin_chain() {
        let chain = GateChain::admin();
        assert_eq!(chain.gates().len(), 2);
        assert_eq!(
            chain.evaluate(Some(&user(UserRole::User))),
            GateOutcome::Reject(Rejection::Forbidden)
        );
        assert_eq!(
            chain.evaluate(Some(&user(UserRole::Admin))),
            GateOutcome::Continue
        );
    }

    #[test]
    fn test_first_rejection_wins() {
        // anonymous request to an admin route is 401, never 403
        assert_eq!(
            GateChain::admin().evaluate(None),
            GateOutcome::Reject(Rejection::Unauthenticated)
        );
    }

    #[test]
    fn test_rejection_maps_to_error() {
        assert!(matches!(
            AuthError::from(Rejection::Forbidden),
            AuthError::Forbidden
        ));
        assert!(matches!(
            AuthError::from(Rejection::Unauthenticated),
            AuthError::Unauthenticated
        ));
    }
}
