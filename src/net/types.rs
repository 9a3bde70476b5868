//! Wire records exchanged with the auth backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    /// Name to show in the header.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.username)
    }
}

/// Capability sets granted to the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Page paths the session may open.
    #[serde(default)]
    pub pages: Vec<String>,
    /// Permission keys for gated UI actions.
    #[serde(default)]
    pub elements: Vec<String>,
}

/// Login form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Some backends echo the account; the session still reloads it.
    #[serde(default)]
    pub user: Option<Identity>,
}
