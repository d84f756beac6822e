//! Tests for config functionality.

use super::operations::parse_utc_offset;
use crate::config::types::default_topics;
use crate::config::{Config, Schedule};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.topics.len(), 10);
    assert_eq!(config.topics[0].title, "Modern DevOps Practices");
    assert_eq!(config.schedule.frequency, "twice_weekly");
    assert_eq!(config.schedule.days, vec!["tuesday", "friday"]);
    assert_eq!(config.schedule.time, "10:00");
    assert_eq!(config.endpoint.base_url, "http://localhost:11434/v1");
    assert_eq!(config.endpoint.api_key.as_deref(), Some("ollama"));
    assert_eq!(config.endpoint.probe_timeout_secs, 10);
    assert_eq!(config.endpoint.max_tokens, 3000);
    assert_eq!(config.posts.output_dir, "content");
    assert_eq!(config.posts.author, "DevOps Expert");
    assert!(config.posts.timezone_offset.is_none());
    config.validate().unwrap();
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
topics:
  - title: Rust for Ops
    category: tech
    keywords: [rust, tooling]
    description: Why ops teams pick up Rust
    difficulty: beginner
posts:
  author: Jane
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.topics.len(), 1);
    assert_eq!(config.topics[0].keywords, vec!["rust", "tooling"]);
    assert_eq!(config.topics[0].difficulty.as_deref(), Some("beginner"));
    assert_eq!(config.posts.author, "Jane");

    // Unspecified values should use defaults
    assert_eq!(config.posts.output_dir, "content");
    assert_eq!(config.schedule, Schedule::default());
    assert_eq!(config.endpoint.max_tokens, 3000);
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
future_setting: true
schedule:
  frequency: weekly
  days: [monday]
  time: "09:30"
  timezone: somewhere
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.schedule.frequency, "weekly");
    assert_eq!(config.schedule.time, "09:30");
    assert_eq!(config.topics, default_topics());
}

#[test]
fn test_parse_invalid_yaml() {
    let err = Config::from_yaml("topics: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_empty_topics() {
    let err = Config::from_yaml("topics: []").unwrap_err();
    assert!(err.to_string().contains("at least one entry"));
}

#[test]
fn test_validate_category_with_separator() {
    let yaml = r#"
topics:
  - title: Escape
    category: ../outside
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("not a plain directory name"));
}

#[test]
fn test_validate_blank_title() {
    let yaml = r#"
topics:
  - title: "  "
    category: tech
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("empty title"));
}

#[test]
fn test_validate_endpoint_bounds() {
    let mut config = Config::default();
    config.endpoint.max_tokens = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.endpoint.probe_timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.endpoint.temperature = 2.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_schedule_time() {
    let mut config = Config::default();
    config.schedule.time = "25:00".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("schedule.time"));
}

#[test]
fn test_validate_timezone_offset() {
    let mut config = Config::default();
    config.posts.timezone_offset = Some("+05:30".to_string());
    assert_eq!(
        config.timezone_offset().unwrap().unwrap().local_minus_utc(),
        5 * 3600 + 30 * 60
    );

    config.posts.timezone_offset = Some("IST".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_utc_offset_forms() {
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert_eq!(parse_utc_offset("-08:00").unwrap().local_minus_utc(), -8 * 3600);
    assert_eq!(parse_utc_offset("+0130").unwrap().local_minus_utc(), 5400);
    assert!(parse_utc_offset("+5:30").is_none());
    assert!(parse_utc_offset("05:30").is_none());
    assert!(parse_utc_offset("+24:00").is_none());
    assert!(parse_utc_offset("").is_none());
}

#[test]
fn test_to_yaml_round_trips() {
    let config = Config::default();
    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("topics:"));
    assert!(yaml.contains("Docker Security Practices"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("topics.yaml");
    std::fs::write(&path, "posts:\n  output_dir: site/content\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.posts.output_dir, "site/content");
}

#[test]
fn test_config_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load(temp_dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_load_or_create_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scripts").join("topics.yaml");

    let config = Config::load_or_create(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());

    // Second call reads the file that was just written.
    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_load_or_create_keeps_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("topics.yaml");
    let yaml = "topics:\n  - title: Only One\n    category: notes\n";
    std::fs::write(&path, yaml).unwrap();

    let config = Config::load_or_create(&path).unwrap();
    assert_eq!(config.topics.len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), yaml);
}
