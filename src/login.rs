//! Credential submission: persist the token, load the session, navigate.
//!
//! Failures before the token is stored leave storage and session untouched
//! and never navigate; the caller shows the error inline.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::AuthError;
use crate::net::types::Credentials;
use crate::session::SessionController;
use crate::storage::StorageTier;
use crate::util::navigate::Navigator;

pub struct LoginFlow<'a> {
    controller: &'a SessionController,
    navigator: &'a dyn Navigator,
}

impl<'a> LoginFlow<'a> {
    pub fn new(controller: &'a SessionController, navigator: &'a dyn Navigator) -> Self {
        Self { controller, navigator }
    }

    /// Sign in and navigate to `destination`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::LoginFailed`] when the backend rejects the credentials.
    /// - [`AuthError::TokenPersistFailed`] when the token does not read back.
    /// - [`AuthError::IdentityFetchFailed`] when the new session cannot be loaded.
    pub async fn submit(&self, credentials: Credentials, remember: bool, destination: &str) -> Result<(), AuthError> {
        let tokens = self.controller.tokens();
        let response = self.controller.api().login(&credentials).await.map_err(AuthError::from)?;

        tokens.write(&response.token, remember);
        if tokens.read_tier(StorageTier::for_remember(remember)).as_deref() != Some(response.token.as_str()) {
            log::warn!("session token did not persist (remember: {remember})");
            return Err(AuthError::TokenPersistFailed);
        }

        self.controller.refresh().await?;
        log::info!("login succeeded, navigating to {destination}");
        self.navigator.navigate(destination);
        self.navigator.refresh();
        Ok(())
    }
}

/// Trim the form fields, requiring both.
///
/// # Errors
///
/// Returns the inline message to show when a field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}
