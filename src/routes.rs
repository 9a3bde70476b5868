//! Route classification for layout and access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the auth guard and the layout chooser ask the same questions of a
//! pathname: is it protected, does it use the minimal (chrome-less) layout,
//! and does it show the admin sidebar. Everything here is pure.
//!
//! Callers pass canonical pathnames. Matching is case-sensitive and does not
//! normalize trailing slashes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::{Deserialize, Serialize};

/// Trailing marker that turns a pattern into a prefix match.
pub const WILDCARD: char = '*';

/// Paths under this prefix render with the admin sidebar.
pub const ADMIN_PREFIX: &str = "/admin";

/// An exact path or a prefix pattern (`"/admin/*"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoutePattern {
    Exact(String),
    /// Literal prefix with the wildcard marker removed.
    Prefix(String),
}

impl RoutePattern {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(WILDCARD) {
            Some(prefix) => Self::Prefix(prefix.to_owned()),
            None => Self::Exact(raw.to_owned()),
        }
    }

    /// Whether `path` is covered by this pattern. The empty path never matches.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

impl From<String> for RoutePattern {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for RoutePattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<RoutePattern> for String {
    fn from(pattern: RoutePattern) -> Self {
        match pattern {
            RoutePattern::Exact(exact) => exact,
            RoutePattern::Prefix(mut prefix) => {
                prefix.push(WILDCARD);
                prefix
            }
        }
    }
}

/// Configured route lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub protected: Vec<RoutePattern>,
    pub minimal: Vec<RoutePattern>,
    pub sidebar_prefix: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            protected: vec![RoutePattern::parse(ADMIN_PREFIX), RoutePattern::parse("/admin/*")],
            minimal: vec![RoutePattern::parse("/login"), RoutePattern::parse("/error/*")],
            sidebar_prefix: ADMIN_PREFIX.to_owned(),
        }
    }
}

/// Which page chrome a path renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Bare content, no header or sidebar (login, error pages).
    Minimal,
    /// Admin chrome with the navigation sidebar.
    Sidebar,
    /// Header only.
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteClassifier {
    config: RouteConfig,
}

impl RouteClassifier {
    #[must_use]
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    #[must_use]
    pub fn is_minimal_layout(&self, path: &str) -> bool {
        any_match(&self.config.minimal, path)
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        any_match(&self.config.protected, path)
    }

    #[must_use]
    pub fn shows_sidebar(&self, path: &str) -> bool {
        !path.is_empty() && path.starts_with(self.config.sidebar_prefix.as_str())
    }

    /// Minimal wins over sidebar so a chrome-less page under the admin
    /// prefix stays chrome-less.
    #[must_use]
    pub fn layout_for(&self, path: &str) -> LayoutKind {
        if self.is_minimal_layout(path) {
            LayoutKind::Minimal
        } else if self.shows_sidebar(path) {
            LayoutKind::Sidebar
        } else {
            LayoutKind::Plain
        }
    }

    /// Strip query and fragment from an href, leaving the pathname.
    #[must_use]
    pub fn path_of(href: &str) -> &str {
        let end = href.find(['?', '#']).unwrap_or(href.len());
        &href[..end]
    }
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new(RouteConfig::default())
    }
}

fn any_match(patterns: &[RoutePattern], path: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(path))
}
