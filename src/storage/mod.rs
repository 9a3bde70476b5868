//! Persistent key-value storage for the session credential and preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` abstracts the browser's two storage areas behind
//! [`KeyValueStore`] so non-browser contexts get a null object instead of
//! runtime checks for `window`. `token` layers the credential's two-tier rule
//! on top.

pub mod provider;
pub mod token;

pub use provider::{BrowserStorage, KeyValueStore, MemoryStorage, NullStorage, StorageTier};
pub use token::TokenStore;
