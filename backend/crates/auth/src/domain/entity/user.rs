//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
    user_role::UserRole,
};

/// Registered account
///
/// The password hash lives on the entity but never leaves the auth crate
/// in a response.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub user_name: UserName,
    /// Unique, lower-cased login identifier
    pub email: Email,
    pub password: UserPassword,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. Self-registered accounts always start as `User`.
    pub fn new(user_name: UserName, email: Email, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password,
            user_role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }

    /// Update user role
    pub fn set_role(&mut self, role: UserRole) {
        self.user_role = role;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample() -> User {
        let raw = RawPassword::new("password123".into()).unwrap();
        User::new(
            UserName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_is_plain_user() {
        let user = sample();
        assert_eq!(user.user_role, UserRole::User);
        assert!(!user.is_admin());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_role() {
        let mut user = sample();
        user.set_role(UserRole::Admin);
        assert!(user.is_admin());
        assert!(user.updated_at >= user.created_at);
    }
}
