use std::path::Path;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Holds the non-blocking writer guards; logs are flushed when this is dropped.
pub struct Logger {
    pub guards: Vec<WorkerGuard>,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let guards = Self::setup_logging(config)?;
        Ok(Logger { guards })
    }

    pub fn setup_logging(config: &LoggingConfig) -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
        let console_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,agrofert_backend=debug"));

        let mut guards = Vec::new();

        let file_layers = if config.log_to_file {
            let root = Path::new(&config.log_dir);
            let error_dir = root.join("error");
            let json_dir = root.join("json");
            std::fs::create_dir_all(&error_dir)?;
            std::fs::create_dir_all(&json_dir)?;

            let (general_writer, general_guard) = non_blocking(rolling::daily(root, "agrofert-backend.log"));
            let (error_writer, error_guard) = non_blocking(rolling::daily(&error_dir, "agrofert-backend-error.log"));
            let (json_writer, json_guard) = non_blocking(rolling::daily(&json_dir, "agrofert-backend.json"));
            guards.extend([general_guard, error_guard, json_guard]);

            let general = fmt::layer()
                .with_writer(general_writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::try_new(&config.file_log_level)?);

            let errors = fmt::layer()
                .with_writer(error_writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::try_new(&config.error_file_log_level)?);

            let json = fmt::layer()
                .json()
                .with_writer(json_writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(EnvFilter::try_new(&config.file_log_level)?);

            Some(general.and_then(errors).and_then(json))
        } else {
            None
        };

        tracing_subscriber::registry()
            .with(
                // Console output - pretty format for development
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(true)
                    .with_filter(console_filter),
            )
            .with(file_layers)
            .try_init()?;

        Ok(guards)
    }
}
