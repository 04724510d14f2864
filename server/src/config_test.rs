use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_url, None);
    assert_eq!(config.client_config().auth_endpoint(), None);
}

#[test]
fn endpoints_are_normalized() {
    let config = AppConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", " https://api.example.com/ "),
        ("AUTH_URL", "https://auth.example.com//"),
        ("AUTH_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.backend_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.client_config().auth_endpoint(), Some(("https://auth.example.com", "anon")));
}

#[test]
fn blank_values_count_as_unset() {
    let config = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "   ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.backend_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    for bad in ["abc", "0", "70000", "-1"] {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("PORT", bad)])),
            Err(ConfigError::InvalidPort { value: bad.to_owned() })
        );
    }
}
