//! Configuration file loading with precedence handling.

use crate::source::ListingSource;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Columns of indentation per comment depth when not configured.
pub const DEFAULT_COMMENT_INDENT: u16 = 2;

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "TPAGER_CONFIG";

/// Environment variable naming the listing file.
const SOURCE_ENV: &str = "TPAGER_SOURCE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tpager/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Listing file opened when none is given on the command line.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Drop queued key presses after each cursor move.
    #[serde(default)]
    pub clear_input_queue: Option<bool>,

    /// Columns of indentation per comment depth.
    #[serde(default)]
    pub comment_indent: Option<u16>,

    /// Number of posts in the demo feed; unbounded when absent.
    #[serde(default)]
    pub demo_limit: Option<usize>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Listing file; the demo feed is shown when `None`.
    pub source: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Drop queued key presses after each cursor move.
    pub clear_input_queue: bool,
    /// Columns of indentation per comment depth.
    pub comment_indent: u16,
    /// Demo feed size.
    pub demo_limit: Option<usize>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            log_file_path: default_log_path(),
            clear_input_queue: true,
            comment_indent: DEFAULT_COMMENT_INDENT,
            demo_limit: None,
        }
    }
}

impl ResolvedConfig {
    /// Where the listing comes from.
    pub fn listing_source(&self) -> ListingSource {
        match &self.source {
            Some(path) => ListingSource::File(path.clone()),
            None => ListingSource::Demo {
                limit: self.demo_limit,
            },
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tpager/tpager.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tpager").join("tpager.log")
    } else {
        PathBuf::from("tpager.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/tpager/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tpager").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TPAGER_CONFIG` environment variable
/// 3. Default path `~/.config/tpager/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TPAGER_SOURCE`: Override listing file (ignored when empty)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(source) = std::env::var_os(SOURCE_ENV).filter(|value| !value.is_empty()) {
        config.source = Some(PathBuf::from(source));
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        source: config.source.or(defaults.source),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        clear_input_queue: config
            .clear_input_queue
            .unwrap_or(defaults.clear_input_queue),
        comment_indent: config.comment_indent.unwrap_or(defaults.comment_indent),
        demo_limit: config.demo_limit.or(defaults.demo_limit),
    }
}

/// Command-line settings that take part in config resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Listing file given as a positional argument.
    pub source: Option<PathBuf>,
    /// `--demo`: show the generated feed even if a file is configured.
    pub demo: bool,
    /// `--demo-limit`.
    pub demo_limit: Option<usize>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(source) = cli.source {
        config.source = Some(source);
    }

    if cli.demo {
        config.source = None;
    }

    if let Some(limit) = cli.demo_limit {
        config.demo_limit = Some(limit);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
