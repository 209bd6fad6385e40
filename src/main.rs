//! tpager - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tpager::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides,
};
use tpager::view::{AppSettings, ColorConfig, ItemStyles};
use tracing::info;

/// tpager - page through posts and comment threads in the terminal
#[derive(Parser, Debug)]
#[command(name = "tpager")]
#[command(version)]
#[command(about = "Terminal pager for browsing threaded listings")]
pub struct Args {
    /// Listing JSON file (shows the demo feed if none is configured)
    pub file: Option<PathBuf>,

    /// Show the generated demo feed even if a listing file is configured
    #[arg(long)]
    pub demo: bool,

    /// Number of posts in the demo feed (unbounded by default)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub demo_limit: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source: self.file.clone(),
            demo: self.demo,
            demo_limit: self
                .demo_limit
                .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        apply_cli_overrides(with_env, args.overrides())
    };

    tpager::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let settings = AppSettings {
        clear_input_queue: config.clear_input_queue,
        comment_indent: config.comment_indent,
        styles: ItemStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
    };

    tpager::view::run_with_source(config.listing_source(), settings)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpager::config::ResolvedConfig;
    use tpager::source::ListingSource;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["tpager", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["tpager", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["tpager"]);
        assert_eq!(args.file, None);
        assert!(!args.demo);
        assert_eq!(args.demo_limit, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["tpager", "front.json"]);
        assert_eq!(args.file, Some(PathBuf::from("front.json")));
    }

    #[test]
    fn test_all_flags_combined() {
        let args = Args::parse_from([
            "tpager",
            "front.json",
            "--demo",
            "--demo-limit",
            "25",
            "--no-color",
            "--config",
            "/tmp/tpager.toml",
        ]);
        assert!(args.demo);
        assert_eq!(args.demo_limit, Some(25));
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tpager.toml")));
    }

    #[test]
    fn test_demo_limit_must_be_positive() {
        let result = Args::try_parse_from(["tpager", "--demo-limit", "0"]);
        assert!(result.is_err(), "--demo-limit 0 should be rejected");
    }

    #[test]
    fn test_file_argument_flows_through_precedence_chain() {
        let args = Args::parse_from(["tpager", "cli.json"]);
        let config = apply_cli_overrides(ResolvedConfig::default(), args.overrides());
        assert_eq!(
            config.listing_source(),
            ListingSource::File(PathBuf::from("cli.json"))
        );
    }

    #[test]
    fn test_demo_flag_selects_demo_feed() {
        let args = Args::parse_from(["tpager", "cli.json", "--demo", "--demo-limit", "7"]);
        let config = apply_cli_overrides(ResolvedConfig::default(), args.overrides());
        assert_eq!(
            config.listing_source(),
            ListingSource::Demo { limit: Some(7) }
        );
    }
}
