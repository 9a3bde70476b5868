//! Static configuration for the session subsystem.
//!
//! The route lists and a handful of well-known locations are the only
//! externally configurable inputs. Defaults match the admin console; hosts
//! may override them from a JSON document embedded at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::routes::RouteConfig;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_DESTINATION: &str = "/admin";
/// Storage key holding the session credential, in either tier.
pub const DEFAULT_TOKEN_KEY: &str = "admin_token";
pub const DEFAULT_THEME_KEY: &str = "admin_theme";
/// Query parameter carrying the post-login return location.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub login_path: String,
    /// Where a successful login lands when no `redirect` parameter is present.
    pub default_destination: String,
    pub token_key: String,
    pub theme_key: String,
    pub routes: RouteConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            default_destination: DEFAULT_DESTINATION.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            routes: RouteConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
