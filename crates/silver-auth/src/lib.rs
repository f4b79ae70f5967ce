//! # silver-auth
//!
//! The credential gate for the Silver ledger.
//!
//! Authentication is an exact plain-string comparison of the submitted
//! `(nick, password)` pair against the static mapping from configuration.
//! There is no hashing, lockout, or rate limiting — this is a login gate for
//! a single-operator tool, not a hardened auth system.
//!
//! Success produces a [`Session`] bound to the nick; failure changes nothing.
//! The caller decides whether to record the login in the action log (the
//! explicit `login` command does; silent re-authentication does not).

mod error;

pub use error::AuthError;

use silver_config::CredentialsConfig;
use silver_core::Session;

/// Check a submitted credential pair against the configured mapping.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] when the nick is unknown or the
/// password differs. Unknown nick and wrong password are deliberately
/// indistinguishable to the caller.
pub fn authenticate(
    credentials: &CredentialsConfig,
    nick: &str,
    password: &str,
) -> Result<Session, AuthError> {
    if !credentials.is_configured() {
        return Err(AuthError::NoUsersConfigured);
    }
    match credentials.password_for(nick) {
        Some(expected) if expected == password => {
            tracing::debug!(user = nick, "login accepted");
            Ok(Session::new(nick))
        }
        _ => {
            tracing::debug!(user = nick, "login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
