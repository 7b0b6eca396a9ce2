use valwatch_cli::config::config_manager::ConfigManager;
use valwatch_cli::errors::ValwatchError;
use valwatch_cli::structs::config::config::Config;

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").expect("empty config");

    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.polling.base_delay_ms, 1000);
    assert_eq!(config.polling.max_delay_ms, 60000);
    assert_eq!(config.polling.min_delay_ms, 500);
    assert!((config.polling.jitter_ratio - 0.1).abs() < f64::EPSILON);
    assert!(!config.export.include_files);
}

#[test]
fn full_toml_overrides_defaults() {
    let config: Config = toml::from_str(
        r#"
[api]
base_url = "https://example.test/api"
timeout_secs = 10

[polling]
base_delay_ms = 2000
max_delay_ms = 30000
min_delay_ms = 250
jitter_ratio = 0.05

[export]
output_dir = "/tmp/reports"
include_files = true
"#,
    )
    .expect("full config");

    assert_eq!(config.api.base_url, "https://example.test/api");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.polling.base_delay_ms, 2000);
    assert_eq!(config.polling.max_delay_ms, 30000);
    assert_eq!(config.export.output_dir.as_deref(), Some("/tmp/reports"));
    assert!(config.export.include_files);
}

#[test]
fn default_config_passes_validation() {
    assert!(ConfigManager::validate_config(&Config::default()).is_ok());
}

#[test]
fn empty_base_url_fails_fast() {
    let mut config = Config::default();
    config.api.base_url = String::new();

    let error = ConfigManager::validate_config(&config).expect_err("invalid config");
    assert!(matches!(error, ValwatchError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_fast() {
    let mut config = Config::default();
    config.api.base_url = "ftp://example.test".to_string();

    assert!(ConfigManager::validate_config(&config).is_err());
}

#[test]
fn zero_timeout_fails_fast() {
    let mut config = Config::default();
    config.api.timeout_secs = 0;

    assert!(ConfigManager::validate_config(&config).is_err());
}

#[test]
fn inverted_delay_bounds_fail_fast() {
    let mut config = Config::default();
    config.polling.max_delay_ms = 100;

    assert!(ConfigManager::validate_config(&config).is_err());
}

#[test]
fn out_of_range_jitter_fails_fast() {
    let mut config = Config::default();
    config.polling.jitter_ratio = 1.5;

    assert!(ConfigManager::validate_config(&config).is_err());
}
