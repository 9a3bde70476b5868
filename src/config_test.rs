use super::*;
use crate::routes::RoutePattern;

#[test]
fn defaults_point_at_admin_console() {
    let cfg = AuthConfig::default();
    assert_eq!(cfg.login_path, "/login");
    assert_eq!(cfg.default_destination, "/admin");
    assert_eq!(cfg.token_key, "admin_token");
    assert_eq!(cfg.theme_key, "admin_theme");
    assert!(cfg.routes.protected.contains(&RoutePattern::parse("/admin/*")));
}

#[test]
fn from_json_overrides_only_given_fields() {
    let cfg = AuthConfig::from_json(r#"{"login_path":"/signin","routes":{"protected":["/ops/*"]}}"#).unwrap();
    assert_eq!(cfg.login_path, "/signin");
    assert_eq!(cfg.default_destination, DEFAULT_DESTINATION);
    assert_eq!(cfg.routes.protected, vec![RoutePattern::Prefix("/ops/".to_owned())]);
    assert_eq!(cfg.routes.sidebar_prefix, "/admin");
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(AuthConfig::from_json("{not json").is_err());
}
