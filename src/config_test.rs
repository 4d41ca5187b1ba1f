use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HostConfig { bind_host: DEFAULT_BIND_HOST.to_owned(), port: DEFAULT_PORT });
}

#[test]
fn reads_port_and_host() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_HOST", "127.0.0.1")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_HOST", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
}

#[test]
fn rejects_non_numeric_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT \"http\"");
}

#[test]
fn rejects_hostname_bind_address() {
    let config = HostConfig::from_lookup(lookup(&[("BIND_HOST", "localhost")])).unwrap();
    assert_eq!(config.listen_addr(), Err(ConfigError::InvalidAddr("localhost:3000".to_owned())));
}
