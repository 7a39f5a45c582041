//! Command line interface definition

use clap::Parser;
use droidcheck_types::ColorChoice;
use std::path::PathBuf;

/// droidcheck - Verify the file layout of an Android project tree
#[derive(Parser)]
#[command(name = "droidcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify the file layout of an Android project tree")]
#[command(long_about = None)]
pub struct Cli {
    /// Project root to inspect (default: MT5AlertApp)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Read the expected layout from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Color output control
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, conflicts_with = "json")]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["droidcheck"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(cli.color.is_none());
    }

    #[test]
    fn color_accepts_value_enum() {
        let cli = Cli::try_parse_from(["droidcheck", "--color", "never", "--root", "x"]).unwrap();
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert_eq!(cli.root, Some(PathBuf::from("x")));
    }

    #[test]
    fn print_config_conflicts_with_json() {
        assert!(Cli::try_parse_from(["droidcheck", "--json", "--print-config"]).is_err());
    }
}
