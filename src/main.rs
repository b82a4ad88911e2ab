use agrofert_backend::app::app::App;
use agrofert_backend::config::LoggingConfig;
use agrofert_backend::util::logger::Logger;
use dotenv::dotenv;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file before anything reads them
    let dotenv_result = dotenv();

    let logging_config = match LoggingConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid logging configuration: {e}");
            std::process::exit(1);
        }
    };
    let _logger = match Logger::new(&logging_config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            std::process::exit(1);
        }
    };

    info!("🚀 Starting Agrofert Backend Application");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::from_env() {
        Ok(app) => app,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = app.start().await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
