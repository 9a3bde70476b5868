//! Login redirect URLs.
//!
//! The guard sends unauthenticated visitors to the login page with the
//! requested location in `?redirect=`; the login page sends them back after
//! success. A source that is already the login page gets the bare login URL,
//! so `redirect=` is never nested into itself.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::config::{AuthConfig, REDIRECT_PARAM};

/// Login URL that returns to `source` after sign-in.
#[must_use]
pub fn build_login_redirect_url(login_path: &str, source: &str) -> String {
    if is_login_location(login_path, source) {
        return login_path.to_owned();
    }
    format!("{login_path}?{REDIRECT_PARAM}={}", urlencoding::encode(source))
}

/// Like [`build_login_redirect_url`], defaulting the source to the current
/// browser location.
#[must_use]
pub fn login_redirect_for(config: &AuthConfig, source: Option<&str>) -> String {
    match source {
        Some(source) => build_login_redirect_url(&config.login_path, source),
        None => build_login_redirect_url(&config.login_path, &current_location()),
    }
}

/// Whether `source` denotes the login page itself.
#[must_use]
pub fn is_login_location(login_path: &str, source: &str) -> bool {
    source == login_path || source.strip_prefix(login_path).is_some_and(|rest| rest.starts_with('?'))
}

/// Assemble path + query + fragment, tolerating parts with or without their
/// leading `?` / `#`.
#[must_use]
pub fn join_location(pathname: &str, search: &str, hash: &str) -> String {
    let mut href = pathname.to_owned();
    if !search.is_empty() && search != "?" {
        if !search.starts_with('?') {
            href.push('?');
        }
        href.push_str(search);
    }
    if !hash.is_empty() && hash != "#" {
        if !hash.starts_with('#') {
            href.push('#');
        }
        href.push_str(hash);
    }
    href
}

/// Current path + query + fragment, or `/` outside a browser.
#[must_use]
pub fn current_location() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return "/".to_owned();
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_owned());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        join_location(&pathname, &search, &hash)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Where to land after login, given the decoded `redirect` parameter.
///
/// Only same-origin paths are honored; anything else, or a target that is
/// the login page, falls back to the default destination.
#[must_use]
pub fn post_login_target(config: &AuthConfig, redirect: Option<&str>) -> String {
    match redirect {
        Some(target) if is_local_path(target) && !is_login_location(&config.login_path, target) => target.to_owned(),
        _ => config.default_destination.clone(),
    }
}

/// Decode the `redirect` parameter from a raw query string.
#[must_use]
pub fn redirect_param(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name != REDIRECT_PARAM {
            return None;
        }
        urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
    })
}

fn is_local_path(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\")
}
