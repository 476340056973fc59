//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;

/// Environment variable naming the TOML config file.
pub const CONFIG_ENV_VAR: &str = "AGENDA_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from the path in `AGENDA_CONFIG`, or defaults when
/// the variable is unset.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => load_config(Path::new(&path)),
        Err(_) => Ok(AppConfig::default()),
    }
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.listener.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation(
            "listener.bind_address must not be empty".to_string(),
        ));
    }
    if config.observability.cpu_sample_ms == 0 {
        return Err(ConfigError::Validation(
            "observability.cpu_sample_ms must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
