//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("tpager_test_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_tpager_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("tpager") && path_str.ends_with("config.toml"),
        "Path should contain 'tpager' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_tpager_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("tpager.log"),
        "Default log path should end with 'tpager.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = temp_config(
        "valid.toml",
        r#"
source = "/tmp/listing.json"
log_file_path = "/tmp/tpager.log"
clear_input_queue = false
comment_indent = 4
demo_limit = 50
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.source, Some(PathBuf::from("/tmp/listing.json")));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/tpager.log")));
    assert_eq!(config.clear_input_queue, Some(false));
    assert_eq!(config.comment_indent, Some(4));
    assert_eq!(config.demo_limit, Some(50));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = temp_config("invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = temp_config("unknown.toml", "theme = \"monokai\"\n");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = temp_config("partial.toml", "comment_indent = 3\n");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.comment_indent, Some(3));
    assert_eq!(config.source, None);

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(tpager_env)]
fn explicit_path_beats_env_var() {
    let explicit = temp_config("explicit.toml", "comment_indent = 7\n");
    let from_env = temp_config("from_env.toml", "comment_indent = 1\n");

    let config = {
        let _guard = EnvGuard::set(CONFIG_ENV, &from_env);
        load_config_with_precedence(Some(explicit.clone()))
    };

    assert_eq!(config.unwrap().unwrap().comment_indent, Some(7));
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(tpager_env)]
fn env_var_config_path_is_used() {
    let from_env = temp_config("env_only.toml", "demo_limit = 9\n");

    let config = {
        let _guard = EnvGuard::set(CONFIG_ENV, &from_env);
        load_config_with_precedence(None)
    };

    assert_eq!(config.unwrap().unwrap().demo_limit, Some(9));
    fs::remove_file(from_env).ok();
}

#[test]
fn merge_config_without_file_uses_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_takes_file_values() {
    let file = ConfigFile {
        comment_indent: Some(5),
        clear_input_queue: Some(false),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));

    assert_eq!(resolved.comment_indent, 5);
    assert!(!resolved.clear_input_queue);
    assert_eq!(resolved.log_file_path, default_log_path());
    assert_eq!(resolved.source, None);
}

#[test]
fn default_config_has_documented_values() {
    let config = ResolvedConfig::default();
    assert!(config.clear_input_queue);
    assert_eq!(config.comment_indent, DEFAULT_COMMENT_INDENT);
    assert_eq!(config.demo_limit, None);
    assert_eq!(
        config.listing_source(),
        ListingSource::Demo { limit: None }
    );
}

#[test]
#[serial(tpager_env)]
fn env_source_overrides_file() {
    let file = ConfigFile {
        source: Some(PathBuf::from("/from/file.json")),
        ..ConfigFile::default()
    };

    let resolved = {
        let _guard = EnvGuard::set(SOURCE_ENV, "/from/env.json");
        apply_env_overrides(merge_config(Some(file)))
    };

    assert_eq!(resolved.source, Some(PathBuf::from("/from/env.json")));
}

#[test]
#[serial(tpager_env)]
fn empty_env_source_is_ignored() {
    let resolved = {
        let _guard = EnvGuard::set(SOURCE_ENV, "");
        apply_env_overrides(ResolvedConfig::default())
    };

    assert_eq!(resolved.source, None);
}

#[test]
fn cli_source_overrides_everything() {
    let config = ResolvedConfig {
        source: Some(PathBuf::from("/from/env.json")),
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(
        config,
        CliOverrides {
            source: Some(PathBuf::from("cli.json")),
            ..CliOverrides::default()
        },
    );

    assert_eq!(
        resolved.listing_source(),
        ListingSource::File(PathBuf::from("cli.json"))
    );
}

#[test]
fn cli_demo_flag_wins_over_source() {
    let config = ResolvedConfig {
        source: Some(PathBuf::from("/from/file.json")),
        demo_limit: Some(10),
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(
        config,
        CliOverrides {
            demo: true,
            demo_limit: Some(3),
            ..CliOverrides::default()
        },
    );

    assert_eq!(
        resolved.listing_source(),
        ListingSource::Demo { limit: Some(3) }
    );
}

#[test]
fn cli_without_flags_keeps_config() {
    let config = ResolvedConfig {
        comment_indent: 6,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(config.clone(), CliOverrides::default());
    assert_eq!(resolved, config);
}

/// Sets an env var for the lifetime of the guard.
struct EnvGuard {
    key: &'static str,
    previous: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let previous = env::var_os(key);
        env::set_var(key, value);
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}
