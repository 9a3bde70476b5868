//! Two-tier persistence of the session credential.
//!
//! The credential lives in exactly one tier. Every write clears both tiers
//! before setting the chosen one, and all of it happens synchronously so no
//! reader can observe the token in both tiers or in neither mid-write. Reads
//! check the ephemeral tier first and fall back to the remembered tier.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::Arc;

use super::provider::{BrowserStorage, KeyValueStore, NullStorage, StorageTier};

#[derive(Clone)]
pub struct TokenStore {
    key: String,
    ephemeral: Arc<dyn KeyValueStore>,
    remembered: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("key", &self.key)
            .field("available", &self.is_available())
            .finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(key: impl Into<String>, ephemeral: Arc<dyn KeyValueStore>, remembered: Arc<dyn KeyValueStore>) -> Self {
        Self { key: key.into(), ephemeral, remembered }
    }

    /// Store backed by `sessionStorage` / `localStorage`.
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(
            key,
            Arc::new(BrowserStorage::new(StorageTier::Ephemeral)),
            Arc::new(BrowserStorage::new(StorageTier::Remembered)),
        )
    }

    /// Store for contexts without persistent storage; every operation is a no-op.
    pub fn unavailable(key: impl Into<String>) -> Self {
        Self::new(key, Arc::new(NullStorage), Arc::new(NullStorage))
    }

    /// Whether the remembered tier persists anything in this context.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.remembered.is_available()
    }

    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.ephemeral.get(&self.key).or_else(|| self.remembered.get(&self.key))
    }

    /// Read one tier only, without fallback.
    #[must_use]
    pub fn read_tier(&self, tier: StorageTier) -> Option<String> {
        self.tier(tier).get(&self.key)
    }

    pub fn write(&self, token: &str, remember: bool) {
        self.clear();
        self.tier(StorageTier::for_remember(remember)).set(&self.key, token);
        log::debug!("session token stored (remember: {remember})");
    }

    pub fn clear(&self) {
        self.ephemeral.remove(&self.key);
        self.remembered.remove(&self.key);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn tier(&self, tier: StorageTier) -> &dyn KeyValueStore {
        match tier {
            StorageTier::Ephemeral => self.ephemeral.as_ref(),
            StorageTier::Remembered => self.remembered.as_ref(),
        }
    }
}
