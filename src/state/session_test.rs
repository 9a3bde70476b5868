use super::*;

fn identity() -> Identity {
    Identity {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        display_name: None,
        avatar_url: None,
        roles: vec![],
    }
}

fn with_elements(keys: &[&str]) -> SessionState {
    SessionState {
        accessible_elements: Some(keys.iter().map(|k| (*k).to_owned()).collect()),
        ..SessionState::default()
    }
}

// =============================================================
// Defaults and phase
// =============================================================

#[test]
fn default_state_is_uninitialized() {
    let state = SessionState::default();
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert_eq!(state.phase(), SessionPhase::Uninitialized);
}

#[test]
fn phase_follows_flags() {
    let mut state = SessionState { initialized: true, ..SessionState::default() };
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    state.loading = true;
    assert_eq!(state.phase(), SessionPhase::Loading);
    state.loading = false;
    state.network_error = true;
    assert_eq!(state.phase(), SessionPhase::Error);
    state.identity = Some(identity());
    assert_eq!(state.phase(), SessionPhase::Ready);
}

// =============================================================
// Capabilities
// =============================================================

#[test]
fn missing_capability_set_grants_nothing() {
    let state = SessionState::default();
    assert!(!state.has_capability(EDIT_KEY));
    assert!(!state.can_create());
    assert!(!state.can_access_page("/admin"));
}

#[test]
fn edit_key_allows_edit_only() {
    let state = with_elements(&["admin-edit-button"]);
    assert!(state.can_edit());
    assert!(!state.can_delete());
    assert!(!state.can_create());
}

#[test]
fn apply_permissions_fills_both_sets() {
    let mut state = SessionState::default();
    state.apply_permissions(Permissions {
        pages: vec!["/admin/users".to_owned()],
        elements: vec![DELETE_KEY.to_owned()],
    });
    assert!(state.can_access_page("/admin/users"));
    assert!(!state.can_access_page("/admin/roles"));
    assert!(state.can_delete());
}

#[test]
fn reset_identity_drops_user_and_grants() {
    let mut state = with_elements(&[CREATE_KEY]);
    state.identity = Some(identity());
    state.loading = true;
    state.pages_initialized = true;
    state.initialized = true;
    state.reset_identity();
    assert!(state.identity.is_none());
    assert!(!state.loading);
    assert!(state.accessible_elements.is_none());
    assert!(!state.pages_initialized);
    assert!(state.initialized);
}
