use moneta_domain::config::AppConfig;
use moneta_kernel::config::load_config;
use std::fs;

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        r#"
[window]
title = "Moneta (staging)"
width = 1024.0
height = 768.0

[logging]
level = "debug"
"#,
    )
    .expect("write config file");

    let cfg: AppConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.window.title, "Moneta (staging)");
    assert_eq!(cfg.window.width, 1024.0);
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.toml");

    let cfg: AppConfig = load_config(Some(&path)).expect("defaults apply");
    assert_eq!(cfg.window.title, "Moneta");
    assert!(cfg.logging.path.is_none());
}
