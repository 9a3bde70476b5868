//! Storage providers.
//!
//! Client-side (hydrate): [`BrowserStorage`] talks to `sessionStorage` /
//! `localStorage` through `web-sys`, looking the area up on every call.
//! Server-side (SSR) and native tests: [`NullStorage`] reports itself
//! unavailable and stores nothing.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage errors (quota, privacy mode) are swallowed. A failed write
//! shows up as a missing value on the next read, which is what callers check.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Which browser storage area a value lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageTier {
    /// Cleared when the browsing session ends (`sessionStorage`).
    Ephemeral,
    /// Survives restarts (`localStorage`).
    Remembered,
}

impl StorageTier {
    #[must_use]
    pub fn for_remember(remember: bool) -> Self {
        if remember { Self::Remembered } else { Self::Ephemeral }
    }
}

/// Synchronous string storage. Implementations never fail loudly.
pub trait KeyValueStore: Send + Sync {
    /// Whether this store actually persists anything.
    fn is_available(&self) -> bool;
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Store for contexts without persistent storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStorage;

impl KeyValueStore for NullStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-process store, used by tests and by hosts that want session-only state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut entries)
    }
}

impl KeyValueStore for MemoryStorage {
    fn is_available(&self) -> bool {
        true
    }

    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        });
    }

    fn remove(&self, key: &str) {
        self.with_entries(|entries| {
            entries.remove(key);
        });
    }
}

/// One of the browser's storage areas.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStorage {
    tier: StorageTier,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(tier: StorageTier) -> Self {
        Self { tier }
    }

    #[cfg(feature = "hydrate")]
    fn area(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.tier {
            StorageTier::Ephemeral => window.session_storage().ok().flatten(),
            StorageTier::Remembered => window.local_storage().ok().flatten(),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.area().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.area()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = self.area() {
                if area.set_item(key, value).is_err() {
                    log::warn!("storage write rejected for key {key} ({:?})", self.tier);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = self.area() {
                let _ = area.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
