use super::*;

#[test]
fn identity_deserializes_with_optional_fields_missing() {
    let identity: Identity = serde_json::from_str(r#"{"id":"u1","username":"alice"}"#).unwrap();
    assert_eq!(identity.display_name, None);
    assert!(identity.roles.is_empty());
    assert_eq!(identity.label(), "alice");
}

#[test]
fn identity_label_prefers_non_empty_display_name() {
    let mut identity: Identity = serde_json::from_str(r#"{"id":"u1","username":"alice","display_name":"Alice A."}"#).unwrap();
    assert_eq!(identity.label(), "Alice A.");
    identity.display_name = Some(String::new());
    assert_eq!(identity.label(), "alice");
}

#[test]
fn permissions_default_to_empty_sets() {
    let perms: Permissions = serde_json::from_str(r#"{"elements":["admin-edit-button"]}"#).unwrap();
    assert!(perms.pages.is_empty());
    assert_eq!(perms.elements, vec!["admin-edit-button".to_owned()]);
}

#[test]
fn login_response_user_is_optional() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert!(resp.user.is_none());
}

#[test]
fn credentials_serialize_as_flat_object() {
    let creds = Credentials { username: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "username": "alice", "password": "pw" })
    );
}
