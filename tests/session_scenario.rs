//! End-to-end walk through the admin console's access rules using only the
//! public API: classification, guarding, capability gates, and session
//! invalidation after a rejected credential.

use std::rc::Rc;
use std::sync::Arc;

use admin_session::components::auth_guard::{GuardDecision, guard_decision};
use admin_session::error::ApiError;
use admin_session::net::api::AuthApi;
use admin_session::net::types::{Credentials, Identity, LoginResponse, Permissions};
use admin_session::routes::{RouteClassifier, RouteConfig, RoutePattern};
use admin_session::session::SessionController;
use admin_session::state::session::SessionState;
use admin_session::storage::{KeyValueStore, MemoryStorage, TokenStore};
use async_trait::async_trait;
use futures::executor::block_on;

const KEY: &str = "admin_token";

struct RejectingApi;

#[async_trait(?Send)]
impl AuthApi for RejectingApi {
    async fn fetch_identity(&self, _token: &str) -> Result<Identity, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        Err(ApiError::Unauthorized)
    }

    async fn fetch_permissions(&self, _token: &str) -> Result<Permissions, ApiError> {
        Err(ApiError::Unauthorized)
    }
}

fn routes() -> RouteClassifier {
    RouteClassifier::new(RouteConfig {
        protected: vec![RoutePattern::parse("/admin")],
        minimal: vec![RoutePattern::parse("/login")],
        ..RouteConfig::default()
    })
}

fn settled() -> SessionState {
    SessionState { initialized: true, ..SessionState::default() }
}

#[test]
fn login_page_is_minimal_and_public() {
    let routes = routes();
    assert!(routes.is_minimal_layout("/login"));
    assert!(!routes.is_protected("/login"));
}

#[test]
fn anonymous_admin_visit_is_sent_to_login() {
    assert_eq!(
        guard_decision(&routes(), "/login", &settled(), false, "/admin"),
        GuardDecision::Redirect("/login?redirect=%2Fadmin".to_owned())
    );
}

#[test]
fn redirect_target_keeps_the_query() {
    let routes = RouteClassifier::new(RouteConfig {
        protected: vec![RoutePattern::parse("/admin"), RoutePattern::parse("/admin/*")],
        ..RouteConfig::default()
    });
    assert_eq!(
        guard_decision(&routes, "/login", &settled(), false, "/admin/users?tab=2"),
        GuardDecision::Redirect("/login?redirect=%2Fadmin%2Fusers%3Ftab%3D2".to_owned())
    );
}

#[test]
fn edit_capability_allows_edit_but_not_delete() {
    let state = SessionState {
        accessible_elements: Some(["admin-edit-button".to_owned()].into_iter().collect()),
        ..settled()
    };
    assert!(state.can_edit());
    assert!(!state.can_delete());
}

#[test]
fn rejected_stored_token_clears_session_and_both_tiers() {
    let ephemeral = MemoryStorage::new();
    let remembered = MemoryStorage::new();
    let tokens = TokenStore::new(KEY, Arc::new(ephemeral.clone()), Arc::new(remembered.clone()));
    tokens.write("looks-valid", true);
    let controller = SessionController::new(tokens.clone(), Rc::new(RejectingApi), "/login");

    block_on(controller.initialize());

    assert!(controller.snapshot().identity.is_none());
    assert!(!controller.snapshot().loading);
    assert!(!tokens.is_authenticated());
    assert_eq!(ephemeral.get(KEY), None);
    assert_eq!(remembered.get(KEY), None);
}
