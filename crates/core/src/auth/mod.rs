//! Session and identity handling
//!
//! Mock identity only: accounts live in memory and login matches by email
//! with no password verification, matching the demo site. One `Identity`
//! exists per session and holds the current user, if any.

pub mod access;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{User, UserRole};

/// Invite code required to register an ADMIN account
pub const ADMIN_INVITE_CODE: &str = "FADED-ADMIN-2025";

/// In-memory account directory plus the current signed-in user
#[derive(Debug)]
pub struct Identity {
    users: Vec<User>,
    current: Option<Uuid>,
}

impl Identity {
    /// Empty directory, nobody signed in
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            current: None,
        }
    }

    /// Directory pre-populated with the demo accounts
    pub fn with_seed_users() -> Self {
        let mut identity = Self::new();
        identity.users.push(User::new(
            "John Doe".into(),
            "john@example.com".into(),
            UserRole::Customer,
        ));
        identity.users.push(User::new(
            "Admin User".into(),
            "admin@fadedsteps.com".into(),
            UserRole::Admin,
        ));
        identity
    }

    /// Sign in by email match
    pub fn login(&mut self, email: &str) -> Result<&User> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email)
            .ok_or_else(|| Error::Authentication(format!("No account for {email}")))?;

        self.current = Some(user.id);
        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(user)
    }

    /// Register a new account and sign it in.
    ///
    /// ADMIN registration requires the invite code; duplicate emails are
    /// rejected.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        role: UserRole,
        invite_code: Option<&str>,
    ) -> Result<&User> {
        if role == UserRole::Admin && invite_code != Some(ADMIN_INVITE_CODE) {
            return Err(Error::Authentication(
                "Invalid admin invite code".to_string(),
            ));
        }

        if self.users.iter().any(|u| u.email == email) {
            return Err(Error::Authentication(format!(
                "An account already exists for {email}"
            )));
        }

        let user = User::new(name.to_string(), email.to_string(), role);
        let user_id = user.id;
        tracing::info!(user_id = %user_id, role = %role, "Registered new account");

        let idx = self.users.len();
        self.users.push(user);
        self.current = Some(user_id);
        Ok(&self.users[idx])
    }

    /// Sign out; idempotent
    pub fn logout(&mut self) {
        if let Some(user_id) = self.current.take() {
            tracing::info!(user_id = %user_id, "User logged out");
        }
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<&User> {
        let current = self.current?;
        self.users.iter().find(|u| u.id == current)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}
