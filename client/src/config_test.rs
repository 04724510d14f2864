use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let cfg = ClientConfig::new(
        Some("https://api.example.com/".to_owned()),
        Some("https://auth.example.com//".to_owned()),
        Some("anon".to_owned()),
    );
    assert_eq!(cfg.backend_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(cfg.auth_url.as_deref(), Some("https://auth.example.com"));
}

#[test]
fn new_drops_blank_values() {
    let cfg = ClientConfig::new(Some("   ".to_owned()), Some("/".to_owned()), Some(String::new()));
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn auth_endpoint_requires_url_and_key() {
    let partial = ClientConfig::new(None, Some("https://auth.example.com".to_owned()), None);
    assert_eq!(partial.auth_endpoint(), None);

    let full = ClientConfig::new(None, Some("https://auth.example.com".to_owned()), Some("k".to_owned()));
    assert_eq!(full.auth_endpoint(), Some(("https://auth.example.com", "k")));
}
