use std::env;
use tracing::{debug, error, info};

use crate::config::{env_flag, ConfigError};

/// Minimum length of `ADMIN_API_KEY` when one is set.
pub const MIN_ADMIN_KEY_LEN: usize = 16;

/// Quote desk behavior and admin access configuration
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    /// Load the sample quote requests at startup
    pub seed_samples: bool,
    /// Reject status changes the admin view does not offer
    pub strict_transitions: bool,
    /// Key required in `x-admin-key` for admin routes; open when `None`
    pub admin_api_key: Option<String>,
}

impl QuoteConfig {
    /// Load quote configuration from environment variables
    ///
    /// Expected environment variables:
    /// - QUOTES_SEED_SAMPLES: load sample quotes (defaults to true)
    /// - QUOTES_STRICT_TRANSITIONS: enforce the advisory status table (defaults to false)
    /// - ADMIN_API_KEY: admin route key (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading quote configuration from environment variables");

        let seed_samples = env_flag("QUOTES_SEED_SAMPLES", true)?;
        debug!("Seed samples: {}", seed_samples);

        let strict_transitions = env_flag("QUOTES_STRICT_TRANSITIONS", false)?;
        debug!("Strict transitions: {}", strict_transitions);

        let admin_api_key = env::var("ADMIN_API_KEY").ok();
        if admin_api_key.is_some() {
            debug!("Admin API key provided");
        } else {
            debug!("No admin API key, admin routes are open");
        }

        let config = QuoteConfig {
            seed_samples,
            strict_transitions,
            admin_api_key,
        };
        config.validate()?;
        info!("Quote configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref key) = self.admin_api_key {
            if key.len() < MIN_ADMIN_KEY_LEN {
                error!("ADMIN_API_KEY is too short");
                return Err(ConfigError::ValidationError(format!(
                    "ADMIN_API_KEY must be at least {} characters long",
                    MIN_ADMIN_KEY_LEN
                )));
            }
        }
        Ok(())
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        QuoteConfig {
            seed_samples: true,
            strict_transitions: false,
            admin_api_key: None,
        }
    }
}
