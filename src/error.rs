//! Error types for the session subsystem.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here retries. Collaborator failures are classified as [`ApiError`]
//! and folded into [`AuthError`] at the session/login boundary so UI code can
//! render a message via `Display` without inspecting transport details.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure reported by a remote collaborator (identity, login, permissions).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-OK HTTP status to an error.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }

    /// Whether the failure came from the transport rather than the server's answer.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No persistent storage in this execution context.
    #[error("session storage is unavailable")]
    StorageUnavailable,
    /// Loading the signed-in user failed; the stored credential has been purged.
    #[error("could not load the signed-in user: {0}")]
    IdentityFetchFailed(ApiError),
    #[error("login failed: {0}")]
    LoginFailed(String),
    /// The token did not read back from the tier it was written to.
    #[error("could not save the session token")]
    TokenPersistFailed,
}

impl AuthError {
    /// Message shown inline on the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LoginFailed(reason) => format!("Sign in failed: {reason}"),
            Self::TokenPersistFailed | Self::StorageUnavailable => {
                "Sign in failed: your browser did not keep the session.".to_owned()
            }
            Self::IdentityFetchFailed(_) => "Sign in failed: could not load your account.".to_owned(),
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::LoginFailed("invalid username or password".to_owned()),
            other => Self::LoginFailed(other.to_string()),
        }
    }
}
