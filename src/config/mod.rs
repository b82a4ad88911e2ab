pub mod app_conf;
pub mod quote_conf;
pub mod logging_conf;

pub use app_conf::AppConfig;
pub use quote_conf::QuoteConfig;
pub use logging_conf::LoggingConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Reads a boolean flag; accepts true/false, 1/0, yes/no (any case).
pub(crate) fn env_flag(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => parse_flag(&raw)
            .ok_or_else(|| ConfigError::InvalidValue(format!("Invalid {} value: {}", name, raw))),
    }
}

pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
