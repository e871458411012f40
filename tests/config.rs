//! Configuration system tests
//!
//! Tests for config paths and editor config persistence.

use magic_editor::config::EditorConfig;
use magic_editor::config_paths;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
        assert!(path.to_string_lossy().contains("magic-editor"));
    }
}

#[test]
fn test_logs_dir_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
        assert!(logs.ends_with("logs"));
    }
}

#[test]
fn test_settings_file_sits_in_config_dir() {
    if let (Some(config), Some(file)) = (config_paths::config_dir(), config_paths::config_file()) {
        assert_eq!(file.parent(), Some(config.as_path()));
    }
}

// ========================================================================
// EditorConfig Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.model, "llama-3.2-1b-4bit");
    assert_eq!(config.max_tokens, 2048);
    assert_eq!(config.roles, vec!["system", "user", "assistant"]);
    assert_eq!(config.reply_role, None);
    assert_eq!(config.next_turn_role, "user");
    assert_eq!(config.turn_separator, "");
    assert_eq!(config.marker_suffix, "");
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = EditorConfig {
        model: "qwen-2.5-0.5b".to_string(),
        max_tokens: 512,
        roles: vec!["user".to_string(), "narrator".to_string()],
        reply_role: Some("assistant".to_string()),
        ..EditorConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "max_tokens: 64\n").unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.max_tokens, 64);
    assert_eq!(config.model, EditorConfig::default().model);
    assert_eq!(config.roles, EditorConfig::default().roles);
}

#[test]
fn test_reply_marker_opt_in_from_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "reply_role: assistant\nturn_separator: \"\\n\\n\"\nmarker_suffix: \"\\n\"\n",
    )
    .unwrap();

    let config = EditorConfig::load_from(&path);
    assert_eq!(config.reply_role.as_deref(), Some("assistant"));
    assert_eq!(config.turn_separator, "\n\n");
    assert_eq!(config.marker_suffix, "\n");
    assert_eq!(config.next_turn_role, "user");
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "roles: [unterminated\n").unwrap();
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}
