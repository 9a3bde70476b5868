use super::*;

fn classifier(protected: &[&str], minimal: &[&str]) -> RouteClassifier {
    RouteClassifier::new(RouteConfig {
        protected: protected.iter().copied().map(RoutePattern::from).collect(),
        minimal: minimal.iter().copied().map(RoutePattern::from).collect(),
        sidebar_prefix: ADMIN_PREFIX.to_owned(),
    })
}

// =============================================================
// RoutePattern
// =============================================================

#[test]
fn parse_trailing_wildcard_as_prefix() {
    assert_eq!(RoutePattern::parse("/admin/*"), RoutePattern::Prefix("/admin/".to_owned()));
    assert_eq!(RoutePattern::parse("/admin"), RoutePattern::Exact("/admin".to_owned()));
}

#[test]
fn pattern_string_form_restores_marker() {
    assert_eq!(String::from(RoutePattern::parse("/docs/*")), "/docs/*");
    assert_eq!(String::from(RoutePattern::parse("/docs")), "/docs");
}

#[test]
fn exact_pattern_does_not_match_children() {
    let pattern = RoutePattern::parse("/admin");
    assert!(pattern.matches("/admin"));
    assert!(!pattern.matches("/admin/users"));
    assert!(!pattern.matches("/admin/"));
}

#[test]
fn empty_path_never_matches() {
    assert!(!RoutePattern::parse("*").matches(""));
    assert!(!RoutePattern::parse("").matches(""));
}

// =============================================================
// Classifier predicates
// =============================================================

#[test]
fn protected_matches_exact_or_wildcard_prefix() {
    let routes = classifier(&["/admin", "/settings/*"], &[]);
    assert!(routes.is_protected("/admin"));
    assert!(routes.is_protected("/settings/"));
    assert!(routes.is_protected("/settings/profile"));
    assert!(!routes.is_protected("/settings"));
    assert!(!routes.is_protected("/public"));
}

#[test]
fn protected_property_holds_for_every_entry() {
    let entries = ["/a", "/b/*", "/c/d", "/e*"];
    let routes = classifier(&entries, &[]);
    let paths = ["/a", "/a/", "/b/", "/b/x", "/b", "/c/d", "/c/d/e", "/e", "/eagle", "/z", ""];
    for path in paths {
        let expected = entries.iter().any(|entry| match entry.strip_suffix('*') {
            Some(prefix) => !path.is_empty() && path.starts_with(prefix),
            None => path == *entry,
        });
        assert_eq!(routes.is_protected(path), expected, "path {path:?}");
    }
}

#[test]
fn matching_is_case_sensitive_and_slash_exact() {
    let routes = classifier(&["/admin"], &[]);
    assert!(!routes.is_protected("/Admin"));
    assert!(!routes.is_protected("/admin/"));
}

#[test]
fn login_is_minimal_and_not_protected() {
    let routes = classifier(&["/admin"], &["/login"]);
    assert!(routes.is_minimal_layout("/login"));
    assert!(!routes.is_protected("/login"));
}

#[test]
fn sidebar_follows_admin_prefix() {
    let routes = RouteClassifier::default();
    assert!(routes.shows_sidebar("/admin"));
    assert!(routes.shows_sidebar("/admin/users"));
    assert!(!routes.shows_sidebar("/login"));
    assert!(!routes.shows_sidebar(""));
}

#[test]
fn layout_prefers_minimal_then_sidebar() {
    let routes = classifier(&[], &["/login", "/admin/print/*"]);
    assert_eq!(routes.layout_for("/login"), LayoutKind::Minimal);
    assert_eq!(routes.layout_for("/admin/print/42"), LayoutKind::Minimal);
    assert_eq!(routes.layout_for("/admin/users"), LayoutKind::Sidebar);
    assert_eq!(routes.layout_for("/about"), LayoutKind::Plain);
}

#[test]
fn path_of_strips_query_and_fragment() {
    assert_eq!(RouteClassifier::path_of("/admin/users?tab=2#top"), "/admin/users");
    assert_eq!(RouteClassifier::path_of("/admin#x?y"), "/admin");
    assert_eq!(RouteClassifier::path_of("/admin"), "/admin");
}

#[test]
fn route_config_deserializes_pattern_strings() {
    let json = r#"{"protected":["/admin","/admin/*"],"minimal":["/login"]}"#;
    let config: RouteConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.protected[1], RoutePattern::Prefix("/admin/".to_owned()));
    assert_eq!(config.minimal, vec![RoutePattern::Exact("/login".to_owned())]);
    assert_eq!(config.sidebar_prefix, ADMIN_PREFIX);
}
