//! Theme preference persistence.
//!
//! Stored as a raw `"light"` / `"dark"` string in the remembered tier and
//! applied as a `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort; SSR paths safely no-op to keep server
//! rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored preference, or [`Theme::Light`] when absent or unreadable.
pub fn read_preference(store: &dyn KeyValueStore, key: &str) -> Theme {
    store.get(key).as_deref().and_then(Theme::parse).unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    store.set(key, next.as_str());
    next
}
