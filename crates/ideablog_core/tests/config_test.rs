use ideablog_core::{GenerationConfig, IdeaBlogConfig};
use std::io::Write;

#[test]
fn bundled_defaults_match_builtin_defaults() {
    let config = IdeaBlogConfig::from_toml_str("").unwrap();
    assert_eq!(config, IdeaBlogConfig::default());
    assert_eq!(config.style, GenerationConfig::style_default());
    assert_eq!(config.server.address(), "0.0.0.0:10000");
}

#[test]
fn overrides_replace_only_named_keys() {
    let config = IdeaBlogConfig::from_toml_str(
        r#"
        [style]
        temperature = 0.2

        [server]
        port = 8080
        "#,
    )
    .unwrap();

    assert_eq!(*config.style.temperature(), Some(0.2));
    assert_eq!(*config.style.top_k(), Some(64));
    assert_eq!(config.style.model_name(), "gemini-exp-1206");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn malformed_override_is_a_config_error() {
    let err = IdeaBlogConfig::from_toml_str("[server]\nport = \"not a port\"").unwrap_err();
    assert!(err.message().contains("configuration"));
}

#[test]
fn explicit_file_takes_precedence() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[narrative]\nmodel_name = \"gemini-test\"").unwrap();

    let config = IdeaBlogConfig::load_with(Some(file.path())).unwrap();
    assert_eq!(config.narrative.model_name(), "gemini-test");
}

#[test]
fn missing_explicit_file_fails() {
    let path = std::path::Path::new("/nonexistent/ideablog-test.toml");
    assert!(IdeaBlogConfig::load_with(Some(path)).is_err());
}
