use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM);
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn reads_explicit_values() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM", "https://api.college.edu/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "https://api.college.edu");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " "), ("API_UPSTREAM", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn non_http_upstream_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM", "ftp://backend")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUpstream(_)));
}

#[test]
fn unparseable_timeout_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    let cfg = ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])).unwrap();
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}
