use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid nick or password")]
    InvalidCredentials,

    #[error("no users are configured — add a [credentials.users] section to silver.toml")]
    NoUsersConfigured,
}
