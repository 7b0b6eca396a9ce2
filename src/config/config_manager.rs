use std::fs;
use std::path::PathBuf;
use crate::errors::{ValwatchError, ValwatchResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(".valwatch/config.toml"))
            .unwrap_or_default()
    }

    pub fn load() -> ValwatchResult<Config> {
        let config_location = Self::config_path();

        if config_location.exists() {
            log::info!("📋 Loading config from: {}", config_location.display());
            let content = fs::read_to_string(&config_location).map_err(|e| {
                ValwatchError::ConfigurationFileError {
                    path: config_location.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ValwatchError::ConfigurationFileError {
                    path: config_location.display().to_string(),
                    reason: e.message().to_string(),
                }
            })?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn create_sample_config() -> ValwatchResult<()> {
        let sample_config = r#"# Valwatch Configuration

[api]
# Base URL of the validation backend
base_url = "http://localhost:8000/api"

# Per-request timeout in seconds
timeout_secs = 30

[polling]
# Adaptive backoff: base_delay * 2^(attempt-1), capped at max_delay,
# jittered by +/- jitter_ratio, never below min_delay
base_delay_ms = 1000
max_delay_ms = 60000
min_delay_ms = 500
jitter_ratio = 0.1

[export]
# Directory for generated reports (defaults to the current directory)
# output_dir = "/home/user/reports"

# Fetch file contents and embed snippets in reports
include_files = false
"#;

        let config_location = Self::config_path();
        if config_location.exists() {
            return Err(ValwatchError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Remove {} first to regenerate it", config_location.display())),
            ));
        }

        if let Some(parent) = config_location.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_location, sample_config)?;

        log::info!("📝 Sample configuration written to: {}", config_location.display());
        Ok(())
    }

    // Malformed configuration fails fast, before any polling starts.
    pub fn validate_config(config: &Config) -> ValwatchResult<()> {
        if config.api.base_url.is_empty() {
            return Err(ValwatchError::validation_error(
                "api.base_url",
                &config.api.base_url,
                "must not be empty",
                Some("Set the base URL of the validation backend"),
            ));
        }

        if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
            return Err(ValwatchError::validation_error(
                "api.base_url",
                &config.api.base_url,
                "must start with http:// or https://",
                None,
            ));
        }

        if config.api.timeout_secs == 0 {
            return Err(ValwatchError::validation_error(
                "api.timeout_secs",
                "0",
                "must be greater than zero",
                None,
            ));
        }

        if config.polling.base_delay_ms == 0 {
            return Err(ValwatchError::validation_error(
                "polling.base_delay_ms",
                "0",
                "must be greater than zero",
                None,
            ));
        }

        if config.polling.max_delay_ms < config.polling.base_delay_ms {
            return Err(ValwatchError::validation_error(
                "polling.max_delay_ms",
                &config.polling.max_delay_ms.to_string(),
                "must be at least base_delay_ms",
                None,
            ));
        }

        if !(0.0..1.0).contains(&config.polling.jitter_ratio) {
            return Err(ValwatchError::validation_error(
                "polling.jitter_ratio",
                &config.polling.jitter_ratio.to_string(),
                "must be in [0.0, 1.0)",
                None,
            ));
        }

        Ok(())
    }
}
