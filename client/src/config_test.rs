use super::*;

#[test]
fn normalize_base_url_defaults_to_loopback() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("https://api.example.test/")), "https://api.example.test");
    assert_eq!(normalize_base_url(Some("https://api.example.test/v1//")), "https://api.example.test/v1");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
