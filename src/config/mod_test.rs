use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::load(&temp_dir.path().join("config.json")).unwrap();

    assert_eq!(config.database_file, DEFAULT_DATABASE_FILE);
    assert_eq!(config.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
    assert_eq!(config.log_level, None);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"dataDir":"/tmp/vocab-test","sessionTtlSecs":60}"#).unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.data_dir, PathBuf::from("/tmp/vocab-test"));
    assert_eq!(config.session_ttl(), Duration::from_secs(60));
    assert_eq!(config.database_file, DEFAULT_DATABASE_FILE);
    assert_eq!(
        config.database_path(),
        PathBuf::from("/tmp/vocab-test").join(DEFAULT_DATABASE_FILE)
    );
}

#[test]
fn test_invalid_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "{not json").unwrap();

    let result = AppConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_log_filter_prefers_configured_level() {
    let config = AppConfig {
        log_level: Some("warn".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(config.log_filter(), "warn");

    let default_filter = AppConfig::default().log_filter();
    assert!(default_filter == "debug" || default_filter == "info");
}
