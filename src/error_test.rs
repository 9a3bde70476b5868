use super::*;

#[test]
fn from_status_maps_auth_statuses_to_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn only_transport_failures_are_network_errors() {
    assert!(ApiError::Network("offline".to_owned()).is_network());
    assert!(!ApiError::Unauthorized.is_network());
    assert!(!ApiError::Status(502).is_network());
}

#[test]
fn unauthorized_login_becomes_bad_credentials_message() {
    let err = AuthError::from(ApiError::Unauthorized);
    assert_eq!(err, AuthError::LoginFailed("invalid username or password".to_owned()));
    assert_eq!(err.user_message(), "Sign in failed: invalid username or password");
}

#[test]
fn persist_failure_reads_as_login_failure() {
    assert!(AuthError::TokenPersistFailed.user_message().starts_with("Sign in failed"));
}
