//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` exists per app instance. [`crate::session::SessionController`]
//! is its only writer; route guards, permission gates, and the layout read
//! snapshots of it through an `RwSignal` provided via context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use crate::net::types::{Identity, Permissions};

/// Permission key for "create" actions.
pub const CREATE_KEY: &str = "admin-create-button";
/// Permission key for "edit" actions.
pub const EDIT_KEY: &str = "admin-edit-button";
/// Permission key for "delete" actions.
pub const DELETE_KEY: &str = "admin-delete-button";

/// Who is signed in and what they may do.
///
/// Capability sets stay `None` until loaded; `None` grants nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
    pub initialized: bool,
    pub accessible_pages: Option<BTreeSet<String>>,
    pub accessible_elements: Option<BTreeSet<String>>,
    pub pages_loading: bool,
    pub pages_initialized: bool,
    /// Last fetch failed at the transport level.
    pub network_error: bool,
}

/// Lifecycle position derived from the state flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Loading,
    Ready,
    Anonymous,
    Error,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if !self.initialized {
            SessionPhase::Uninitialized
        } else if self.identity.is_some() {
            SessionPhase::Ready
        } else if self.network_error {
            SessionPhase::Error
        } else {
            SessionPhase::Anonymous
        }
    }

    #[must_use]
    pub fn has_capability(&self, key: &str) -> bool {
        self.accessible_elements.as_ref().is_some_and(|elements| elements.contains(key))
    }

    #[must_use]
    pub fn can_create(&self) -> bool {
        self.has_capability(CREATE_KEY)
    }

    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.has_capability(EDIT_KEY)
    }

    #[must_use]
    pub fn can_delete(&self) -> bool {
        self.has_capability(DELETE_KEY)
    }

    /// Whether the page at `path` is in the accessible-pages set.
    #[must_use]
    pub fn can_access_page(&self, path: &str) -> bool {
        self.accessible_pages.as_ref().is_some_and(|pages| pages.contains(path))
    }

    pub(crate) fn apply_permissions(&mut self, permissions: Permissions) {
        self.accessible_pages = Some(permissions.pages.into_iter().collect());
        self.accessible_elements = Some(permissions.elements.into_iter().collect());
    }

    /// Forget the signed-in user and everything granted to them.
    pub(crate) fn reset_identity(&mut self) {
        self.identity = None;
        self.loading = false;
        self.accessible_pages = None;
        self.accessible_elements = None;
        self.pages_loading = false;
        self.pages_initialized = false;
    }
}
