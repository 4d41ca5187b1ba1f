use super::*;

#[test]
fn resolve_api_url_prefers_configured_value() {
    assert_eq!(resolve_api_url(Some("https://api.example.com")), "https://api.example.com");
}

#[test]
fn resolve_api_url_defaults_when_unset() {
    assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
}

#[test]
fn resolve_api_url_defaults_when_blank() {
    assert_eq!(resolve_api_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn routes_are_absolute_paths() {
    for route in [LOGIN_ROUTE, REGISTER_ROUTE, DASHBOARD_ROUTE] {
        assert!(route.starts_with('/'), "{route} should be absolute");
    }
}
