//! Static credential configuration.
//!
//! A flat nick -> password mapping, compared as plain strings at login. This
//! is an intentionally minimal gate: no hashing, no lockout, no roles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    /// Mapping of nick -> password.
    #[serde(default)]
    pub users: BTreeMap<String, String>,
}

impl CredentialsConfig {
    /// Whether at least one user can log in.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.users.is_empty()
    }

    /// The configured password for a nick, if any.
    #[must_use]
    pub fn password_for(&self, nick: &str) -> Option<&str> {
        self.users.get(nick).map(String::as_str)
    }
}
