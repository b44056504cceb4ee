use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            api_upstream_url: DEFAULT_API_UPSTREAM_URL.to_string(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8000"),
        ("API_UPSTREAM_URL", "https://api.example.test/"),
        ("API_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.api_upstream_url, "https://api.example.test");
    assert_eq!(cfg.api_timeout_secs, 5);
}

#[test]
fn from_lookup_blank_upstream_uses_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "   ")])).unwrap();
    assert_eq!(cfg.api_upstream_url, DEFAULT_API_UPSTREAM_URL);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_zero_timeout_errors() {
    let err = HostConfig::from_lookup(lookup_from(&[("API_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_upstream_without_scheme() {
    let err = HostConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "api.internal:8080")])).unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("api.internal:8080".into()));
}
