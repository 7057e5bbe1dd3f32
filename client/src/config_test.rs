use super::*;

#[test]
fn default_base_is_api() {
    assert_eq!(ClientConfig::default().api_base, "/api");
}

#[test]
fn blank_override_falls_back_to_default() {
    assert_eq!(ClientConfig::from_raw(Some("   ")).api_base, DEFAULT_API_BASE);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_raw(Some("https://shop.example.com/api//"));
    assert_eq!(config.api_base, "https://shop.example.com/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("login"), "/api/login");
    assert_eq!(config.endpoint("/cart"), "/api/cart");
}

#[test]
fn root_base_yields_root_relative_endpoints() {
    let config = ClientConfig::from_raw(Some("/"));
    assert_eq!(config.endpoint("user"), "/user");
}
