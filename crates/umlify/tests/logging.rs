//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations.

use std::str::FromStr;
use umlify::core::logging::{init_logging, LogFormat, LOG_FORMAT_ENV, LOG_LEVEL_ENV};

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("COMPACT").unwrap(), LogFormat::Compact);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_environment_variable_names() {
    assert_eq!(LOG_LEVEL_ENV, "UMLIFY_LOG_LEVEL");
    assert_eq!(LOG_FORMAT_ENV, "UMLIFY_LOG_FORMAT");
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call in the process can install the subscriber
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("info"), Some("compact"));
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("error"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
}

#[test]
fn test_init_logging_with_formats() {
    let _ = init_logging(Some("info"), Some("compact"));
    let _ = init_logging(Some("info"), Some("pretty"));
    let _ = init_logging(Some("info"), Some("json"));
}

#[test]
fn test_init_logging_defaults() {
    let _ = init_logging(None, None);
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_pipeline_runs_under_subscriber() {
    let _ = init_logging(Some("trace"), Some("json"));
    let markup = umlify::render("class Traced {\n    public void run(x) {\n    }\n}");
    assert!(markup.contains("    + run(x) : void\n"));
}
