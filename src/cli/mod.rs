//! Command-line interface for ib-tweaker.
//!
//! This module handles CLI argument parsing. Subcommand implementations live
//! in the [`commands`] submodule.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ib-tweaker - inspect and rewrite fonts in Interface Builder storyboards
#[derive(Parser, Debug)]
#[command(name = "ib-tweaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/ib-tweaker/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a storyboard, optionally reduced to the matches of some filters
    Show {
        /// Storyboard or xib file
        file: PathBuf,

        /// Filter to apply, by label or index (repeatable)
        #[arg(short, long = "filter", value_name = "FILTER")]
        filters: Vec<String>,
    },

    /// Replace the first font declaration with a new font and save
    SetFont {
        /// Storyboard or xib file
        file: PathBuf,

        /// Font name (PostScript or family name)
        #[arg(short, long)]
        name: String,

        /// Point size (defaults to the config's default_font_size)
        #[arg(short, long)]
        size: Option<f32>,

        /// Filter the printed result, by label or index (repeatable)
        #[arg(short, long = "filter", value_name = "FILTER")]
        filters: Vec<String>,

        /// Write to this file instead of overwriting the input
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print the result without saving
        #[arg(long)]
        dry_run: bool,

        /// Accept font names the host font system does not know
        #[arg(long)]
        skip_font_check: bool,

        /// Allow overwriting a file with empty text
        #[arg(long)]
        allow_empty: bool,
    },

    /// List the configured filters
    Filters,

    /// List fonts installed on this machine
    Fonts {
        /// Only list names containing this text (case-insensitive)
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },

    /// Write the default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Result of CLI processing
pub enum CliResult {
    /// Command completed successfully
    Done,
    /// Exit with the given code
    Exit(i32),
}

/// Run the parsed command line, printing to stdout.
pub fn process_cli(cli: Cli) -> CliResult {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match commands::run(cli, &mut out) {
        Ok(()) => CliResult::Done,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("ib-tweaker: error: {e:#}");
            CliResult::Exit(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_font() {
        let cli = Cli::try_parse_from([
            "ib-tweaker",
            "set-font",
            "Main.storyboard",
            "--name",
            "Helvetica",
            "--size",
            "18",
            "-f",
            "FONTS",
            "--dry-run",
            "--log-level",
            "debug",
        ])
        .expect("parse");

        assert!(matches!(cli.log_level, Some(LogLevelArg::Debug)));
        match cli.command {
            Commands::SetFont {
                file,
                name,
                size,
                filters,
                dry_run,
                output,
                ..
            } => {
                assert_eq!(file, PathBuf::from("Main.storyboard"));
                assert_eq!(name, "Helvetica");
                assert_eq!(size, Some(18.0));
                assert_eq!(filters, vec!["FONTS".to_string()]);
                assert!(dry_run);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_file() {
        assert!(Cli::try_parse_from(["ib-tweaker", "show"]).is_err());
    }
}
