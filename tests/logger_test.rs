use agrofert_backend::config::LoggingConfig;
use agrofert_backend::util::logger::Logger;
use tracing::{error, info};

// Installs the global subscriber, so this binary holds a single test.
#[test]
fn test_logger_writes_rolling_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = LoggingConfig {
        log_dir: dir.path().to_string_lossy().to_string(),
        ..LoggingConfig::default()
    };

    let logger = Logger::new(&config).expect("logger setup");
    assert_eq!(logger.guards.len(), 3);

    info!("logger test info line");
    error!("logger test error line");
    drop(logger);

    assert!(dir.path().join("error").is_dir());
    assert!(dir.path().join("json").is_dir());
    let general_files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("agrofert-backend.log"))
        .collect();
    assert_eq!(general_files.len(), 1);
    let contents = std::fs::read_to_string(general_files[0].path()).unwrap();
    assert!(contents.contains("logger test info line"));
}
