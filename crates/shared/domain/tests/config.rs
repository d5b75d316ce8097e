use moneta_domain::config::{AppConfig, EndpointConfig, EndpointSource, WindowConfig};
use moneta_domain::constants::DEFAULT_BASE_URL;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Moneta");
    assert!(window.width > 0.0 && window.height > 0.0);

    let endpoint = EndpointConfig::default();
    assert_eq!(endpoint.base_url(), DEFAULT_BASE_URL);
    assert_eq!(endpoint.source(), EndpointSource::Fallback);
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "window": { "title": "Moneta (dev)", "width": 800.0, "height": 600.0 },
        "logging": { "level": "debug", "path": "/tmp/logs" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.window.title, "Moneta (dev)");
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
    assert_eq!(cfg.logging.path.as_deref(), Some(std::path::Path::new("/tmp/logs")));
}

#[test]
fn non_empty_override_wins_verbatim() {
    let endpoint = EndpointConfig::from_override(Some("https://api.example.com"));
    assert_eq!(endpoint.base_url(), "https://api.example.com");
    assert_eq!(endpoint.source(), EndpointSource::Override);
    assert!(endpoint.is_override());
}

#[test]
fn override_is_identity_passthrough() {
    // No trimming and no well-formedness check at resolution time.
    for raw in ["  https://padded.example ", "not a url", "localhost:5005"] {
        let endpoint = EndpointConfig::from_override(Some(raw));
        assert_eq!(endpoint.base_url(), raw);
        assert!(endpoint.is_override());
    }
}

#[test]
fn unset_and_empty_both_fall_back() {
    let unset = EndpointConfig::from_override(None);
    assert_eq!(unset.base_url(), "http://localhost:5005");
    assert_eq!(unset.source(), EndpointSource::Fallback);

    let empty = EndpointConfig::from_override(Some(""));
    assert_eq!(empty.base_url(), "http://localhost:5005");
    assert_eq!(empty.source(), EndpointSource::Fallback);
    assert!(!empty.is_override());
}
