use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load from `APP_HOST` (default 127.0.0.1) and `APP_PORT` (default 8080).
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading application configuration from environment variables");

        let host = env::var("APP_HOST").unwrap_or_else(|_| {
            warn!("APP_HOST not set, using default: 127.0.0.1");
            "127.0.0.1".to_string()
        });
        debug!("App host: {}", host);

        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| {
                warn!("APP_PORT not set, using default: 8080");
                "8080".to_string()
            })
            .parse::<u16>()
            .map_err(|_| {
                error!("Invalid APP_PORT value");
                ConfigError::InvalidValue("Invalid APP_PORT value".to_string())
            })?;
        debug!("App port: {}", port);

        let config = AppConfig { host, port };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.parse::<IpAddr>().is_err() {
            error!("APP_HOST is not an IP address: {}", self.host);
            return Err(ConfigError::ValidationError(format!("APP_HOST must be an IP address, got {}", self.host)));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue(format!("Invalid host: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
