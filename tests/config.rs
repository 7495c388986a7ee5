use essayist::config::Config;
use essayist::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.feed.url.starts_with("https://"));
    assert_eq!(config.display.date_format, datetime::DISPLAY_DATE_FORMAT);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty feed URL should fail
    config.feed.url = String::new();
    assert!(config.validate().is_err());

    // Non-http URL should fail
    config.feed.url = "ftp://example.org/articles.json".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.feed.url = "https://example.org/articles.json".to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_date_format_rejected() {
    let mut config = Config::default();
    config.display.date_format = "%Q nonsense".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("url = \"https://onlibertyandpower.org/articles.json\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[feed]
url = "https://essays.example/feed.json"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.feed.url, "https://essays.example/feed.json");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.display.date_format, datetime::DISPLAY_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();
    assert_eq!(config.feed.url, default_config.feed.url);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}
