//! Composition-time wiring of the session into the Leptos tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_session` builds the one [`SessionController`] for this app
//! instance and mirrors its snapshots into an `RwSignal`, so views re-render
//! through Leptos' own tracking. The controller is `!Send` and lives in a
//! local `StoredValue`; views only reach it from event handlers and effects.

use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::api::AuthApi;
use crate::routes::RouteClassifier;
use crate::session::SessionController;
use crate::state::session::SessionState;
use crate::storage::TokenStore;

/// Everything session-aware components need, provided via context.
#[derive(Clone)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    pub controller: StoredValue<SessionController, LocalStorage>,
    pub tokens: TokenStore,
    pub config: Arc<AuthConfig>,
    pub routes: Arc<RouteClassifier>,
}

/// Build the session for this app instance and provide it to descendants.
pub fn provide_session(config: AuthConfig, api: Rc<dyn AuthApi>) -> SessionContext {
    let tokens = TokenStore::browser(config.token_key.clone());
    let controller = SessionController::new(tokens.clone(), api, config.login_path.clone())
        .with_browser(cfg!(feature = "hydrate"));

    let state = RwSignal::new(controller.snapshot());
    controller.subscribe(move |snapshot| state.set(snapshot.clone()));

    let ctx = SessionContext {
        state,
        controller: StoredValue::new_local(controller),
        tokens,
        routes: Arc::new(RouteClassifier::new(config.routes.clone())),
        config: Arc::new(config),
    };
    provide_context(ctx.clone());
    ctx
}

/// Start the session once the app is running in the browser.
pub fn install_session_initializer(ctx: &SessionContext) {
    let controller = ctx.controller;
    Effect::new(move || {
        let controller = controller.get_value();
        leptos::task::spawn_local(async move {
            controller.initialize().await;
        });
    });
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
