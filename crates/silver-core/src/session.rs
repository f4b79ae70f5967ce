//! The authenticated session context.
//!
//! Mutating store calls take a `&Session` so every audit entry can attribute
//! the actor explicitly. There is no ambient current-user state.

use chrono::{Local, NaiveDateTime};

/// Identity established by the credential gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub started_at: NaiveDateTime,
}

impl Session {
    /// Bind a session to an authenticated nick.
    #[must_use]
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            started_at: Local::now().naive_local(),
        }
    }

    /// The actor recorded in audit entries.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}
