use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), DEFAULT_API_URL);
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("")), DEFAULT_API_URL);
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn resolve_base_url_keeps_explicit_value() {
    assert_eq!(resolve_base_url(Some("https://sheets.example.test/api")), "https://sheets.example.test/api");
}

#[test]
fn resolve_base_url_trims_trailing_slash_and_whitespace() {
    assert_eq!(resolve_base_url(Some(" http://127.0.0.1:9000/api/ ")), "http://127.0.0.1:9000/api");
}

#[test]
fn default_config_uses_local_dev_address() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:8080/api");
}

#[test]
fn new_config_normalizes_base_url() {
    assert_eq!(ApiConfig::new("http://localhost:8080/api/").base_url, "http://localhost:8080/api");
}
