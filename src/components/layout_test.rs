use super::*;
use crate::net::types::Permissions;

#[test]
fn no_pages_loaded_shows_no_entries() {
    assert!(visible_sidebar_entries(&SessionState::default()).is_empty());
}

#[test]
fn entries_follow_accessible_pages() {
    let mut state = SessionState::default();
    state.apply_permissions(Permissions {
        pages: vec!["/admin".to_owned(), "/admin/roles".to_owned(), "/elsewhere".to_owned()],
        elements: vec![],
    });
    assert_eq!(visible_sidebar_entries(&state), vec![("/admin", "Dashboard"), ("/admin/roles", "Roles")]);
}
