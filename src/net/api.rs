//! Auth backend collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! The session core only sees [`AuthApi`]; tests substitute scripted fakes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credentials, Identity, LoginResponse, Permissions};
use crate::error::ApiError;

/// Remote operations the session core depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Load the account the token belongs to.
    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError>;

    /// Exchange credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// Load the capability sets granted to the token.
    async fn fetch_permissions(&self, token: &str) -> Result<Permissions, ApiError>;
}

/// [`AuthApi`] over the admin REST endpoints.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    /// `base_url` is prefixed to every endpoint; empty means same origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_owned() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn fetch_identity(&self, token: &str) -> Result<Identity, ApiError> {
        let url = self.endpoint("/api/auth/me");
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            resp.json::<Identity>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, token);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/api/auth/login");
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_permissions(&self, token: &str) -> Result<Permissions, ApiError> {
        let url = self.endpoint("/api/auth/permissions");
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status()));
            }
            resp.json::<Permissions>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, token);
            Err(ApiError::Unavailable)
        }
    }
}
