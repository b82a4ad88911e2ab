use std::env;
use tracing_subscriber::EnvFilter;

use crate::config::{env_flag, ConfigError};

/// Log output configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub log_to_file: bool,
    pub file_log_level: String,
    pub error_file_log_level: String,
}

impl LoggingConfig {
    /// Read before the subscriber exists, so nothing here logs.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = LoggingConfig {
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_to_file: env_flag("LOG_TO_FILE", true)?,
            file_log_level: env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
            error_file_log_level: env::var("ERROR_FILE_LOG_LEVEL").unwrap_or_else(|_| "error".to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_to_file && self.log_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError("LOG_DIR cannot be empty when LOG_TO_FILE is set".to_string()));
        }
        for (name, level) in [
            ("FILE_LOG_LEVEL", &self.file_log_level),
            ("ERROR_FILE_LOG_LEVEL", &self.error_file_log_level),
        ] {
            EnvFilter::try_new(level)
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid {} value: {}", name, e)))?;
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_dir: "logs".to_string(),
            log_to_file: true,
            file_log_level: "debug".to_string(),
            error_file_log_level: "error".to_string(),
        }
    }
}
