//! Session lifecycle: the only writer of [`SessionState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at composition time and shared by handle (`Clone` is
//! cheap). Views never see this type's internals; they subscribe and receive
//! snapshots after every mutation.
//!
//! DESIGN
//! ======
//! Execution is single-threaded and cooperative. Fetches are the only await
//! points, and each kind of fetch has an in-flight flag: a call that arrives
//! while one is outstanding returns immediately instead of issuing a second
//! request. There is no cancellation; a result is applied to the shared state
//! even if the view that started it is gone, as long as the stored credential
//! is still the one the fetch was made with. A result for a replaced
//! credential is dropped.
//!
//! `refresh` is the exception to single-flight: it waits for an outstanding
//! identity fetch and then issues its own, so its caller always ends with a
//! definitive identity for the credential stored right now.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
#[path = "session_helpers_test.rs"]
pub(crate) mod test_helpers;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::{ApiError, AuthError};
use crate::net::api::AuthApi;
use crate::net::types::Permissions;
use crate::state::session::SessionState;
use crate::storage::TokenStore;
use crate::util::navigate::Navigator;

type Listener = Rc<dyn Fn(&SessionState)>;

/// Handle returned by [`SessionController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Clone)]
pub struct SessionController {
    inner: Rc<Inner>,
}

struct Inner {
    state: RefCell<SessionState>,
    tokens: TokenStore,
    api: Rc<dyn AuthApi>,
    login_path: String,
    in_browser: Cell<bool>,
    identity_in_flight: Cell<bool>,
    identity_waiters: RefCell<Vec<oneshot::Sender<()>>>,
    permissions_in_flight: Cell<bool>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
}

impl SessionController {
    pub fn new(tokens: TokenStore, api: Rc<dyn AuthApi>, login_path: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(SessionState::default()),
                tokens,
                api,
                login_path: login_path.into(),
                in_browser: Cell::new(true),
                identity_in_flight: Cell::new(false),
                identity_waiters: RefCell::new(Vec::new()),
                permissions_in_flight: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Mark whether this controller runs in a browser. Outside one,
    /// `initialize` does nothing. Defaults to `true`.
    #[must_use]
    pub fn with_browser(self, in_browser: bool) -> Self {
        self.inner.in_browser.set(in_browser);
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    #[must_use]
    pub fn api(&self) -> Rc<dyn AuthApi> {
        Rc::clone(&self.inner.api)
    }

    /// Register `listener` to receive a snapshot after every mutation.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// Bring the session up from storage. Runs at most once, and never
    /// outside a browser. A browser that blocks storage settles anonymous.
    pub async fn initialize(&self) {
        if !self.inner.in_browser.get() {
            log::debug!("session initialize skipped: not in a browser");
            return;
        }
        if !self.inner.tokens.is_available() {
            log::warn!("browser storage is unavailable; session stays anonymous");
        }
        if self.inner.state.borrow().initialized {
            return;
        }
        let needs_identity = self.inner.tokens.is_authenticated() && self.inner.state.borrow().identity.is_none();
        self.update(|s| {
            s.initialized = true;
            if needs_identity {
                s.loading = true;
            }
        });
        if needs_identity {
            // Failure already left the state anonymous.
            let _ = self.fetch_identity().await;
        }
    }

    /// Load the identity for the stored credential.
    ///
    /// A failure invalidates the session: identity is cleared and the
    /// credential purged. Calls made while a fetch is outstanding return
    /// `Ok(())` without touching the network. If the stored credential is
    /// replaced while the fetch runs, its result is dropped and `Ok(())`
    /// returned; the new credential is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::IdentityFetchFailed`] when the backend rejects the
    /// credential or cannot be reached.
    pub async fn fetch_identity(&self) -> Result<(), AuthError> {
        if self.inner.identity_in_flight.get() {
            log::debug!("identity fetch already in flight");
            return Ok(());
        }
        let Some(token) = self.inner.tokens.read() else {
            self.update(SessionState::reset_identity);
            return Ok(());
        };

        self.inner.identity_in_flight.set(true);
        self.update(|s| s.loading = true);
        let result = self.inner.api.fetch_identity(&token).await;
        let refresh_pending = self.finish_identity_fetch();

        if self.inner.tokens.read().as_deref() != Some(token.as_str()) {
            log::debug!("credential replaced during identity fetch; result dropped");
            if !refresh_pending {
                self.update(|s| s.loading = false);
            }
            return Ok(());
        }

        match result {
            Ok(identity) => {
                log::info!("session ready for {}", identity.username);
                self.update(|s| {
                    s.identity = Some(identity);
                    s.loading = false;
                    s.network_error = false;
                });
                self.load_permissions().await;
                Ok(())
            }
            Err(err) => {
                log::warn!("identity fetch failed, clearing session: {err}");
                self.inner.tokens.clear();
                let network_error = err.is_network();
                self.update(|s| {
                    s.reset_identity();
                    s.network_error = network_error;
                });
                Err(AuthError::IdentityFetchFailed(err))
            }
        }
    }

    /// Force a definitive identity state for the stored credential, e.g.
    /// right after login. Waits out any fetch already running, then fetches.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_identity`].
    pub async fn refresh(&self) -> Result<(), AuthError> {
        self.update(|s| s.loading = true);
        while self.inner.identity_in_flight.get() {
            let (tx, rx) = oneshot::channel();
            self.inner.identity_waiters.borrow_mut().push(tx);
            // A dropped sender also means the fetch is over.
            let _ = rx.await;
        }
        self.fetch_identity().await
    }

    /// Load the capability sets for the stored credential.
    ///
    /// Failure leaves the sets empty and the credential intact; a transport
    /// failure raises `network_error`. If the credential is replaced while the
    /// fetch runs, the sets are loaded again for the new one.
    pub async fn load_permissions(&self) {
        if self.inner.permissions_in_flight.get() {
            return;
        }
        self.inner.permissions_in_flight.set(true);
        loop {
            let Some(token) = self.inner.tokens.read() else {
                self.update(|s| s.pages_loading = false);
                break;
            };
            self.update(|s| s.pages_loading = true);
            let result = self.inner.api.fetch_permissions(&token).await;
            if self.inner.tokens.read().as_deref() != Some(token.as_str()) {
                log::debug!("credential replaced during permission fetch; loading again");
                continue;
            }
            self.apply_permission_result(result);
            break;
        }
        self.inner.permissions_in_flight.set(false);
    }

    fn apply_permission_result(&self, result: Result<Permissions, ApiError>) {
        match result {
            Ok(permissions) => self.update(|s| {
                s.apply_permissions(permissions);
                s.pages_loading = false;
                s.pages_initialized = true;
            }),
            Err(err) => {
                log::warn!("permission fetch failed: {err}");
                let network_error = err.is_network();
                self.update(|s| {
                    s.accessible_pages = None;
                    s.accessible_elements = None;
                    s.pages_loading = false;
                    s.pages_initialized = true;
                    s.network_error = network_error;
                });
            }
        }
    }

    /// Sign out and go to the login page. Terminal; nothing is retried.
    pub fn logout(&self, navigator: &dyn Navigator) {
        self.inner.tokens.clear();
        self.update(|s| {
            s.reset_identity();
            s.network_error = false;
        });
        log::info!("signed out");
        navigator.navigate(&self.inner.login_path);
    }

    /// Clear the in-flight flag and wake waiting refreshes. Returns whether
    /// any refresh was waiting.
    fn finish_identity_fetch(&self) -> bool {
        self.inner.identity_in_flight.set(false);
        let waiters = std::mem::take(&mut *self.inner.identity_waiters.borrow_mut());
        let woke = !waiters.is_empty();
        for waiter in waiters {
            let _ = waiter.send(());
        }
        woke
    }

    fn update(&self, mutate: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        // Listeners may subscribe or read the state while being notified.
        let listeners: Vec<Listener> = self.inner.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
