//! Tests for show-config CLI command

use crate::cli::test_helpers::test_config;
use serial_test::serial;
use tokchunk::cli::commands::config::{describe, execute, ConfigArgs};
use tokchunk::cli::OutputFormat;

#[test]
fn test_describe_window_and_parallel() {
    let mut config = test_config(128, 16);
    config.parallel.threads = 6;

    let response = describe(&config, false);

    assert!(response.config_file.is_none());
    assert_eq!(response.chunking.size, 128);
    assert_eq!(response.chunking.overlap, 16);
    assert_eq!(response.chunking.step, Some(112));
    assert!(response.parallel.enabled);
    assert_eq!(response.parallel.threads, 6);
}

#[test]
fn test_describe_invalid_window_has_no_step() {
    let mut config = test_config(4, 4);
    config.parallel.enabled = false;

    let response = describe(&config, false);

    assert_eq!(response.chunking.step, None);
    assert!(!response.parallel.enabled);
}

#[test]
#[serial]
fn test_describe_all_includes_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("TOKCHUNK_CONFIG_DIR", dir.path());
    let response = describe(&test_config(10, 2), true);
    std::env::remove_var("TOKCHUNK_CONFIG_DIR");

    let expected = dir.path().join("config.toml");
    assert_eq!(
        response.config_file.as_deref(),
        Some(expected.to_string_lossy().as_ref())
    );
}

#[test]
fn test_describe_json_layout() {
    let response = describe(&test_config(10, 2), false);
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("config_file").is_none());
    assert_eq!(json["chunking"]["step"], 8);
    assert_eq!(json["parallel"]["enabled"], true);
    assert_eq!(json["parallel"]["threads"], 0);
}

#[test]
fn test_show_config_human() {
    let result = execute(
        ConfigArgs { all: false },
        &test_config(128, 16),
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}
