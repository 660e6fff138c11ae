//! Configuration management for element-symbols.
//!
//! Handles:
//! - Command-line argument parsing
//! - Case file discovery for the self-test
//! - Output format and log level

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Command-line arguments for element-symbols
#[derive(Debug, Parser)]
#[command(name = "element-symbols")]
#[command(about = "Validate and enumerate two-letter element symbols")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Case file for the self-test
    #[arg(long, global = true, help = "TOML file with self-test cases")]
    pub cases: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check whether SYMBOL is a valid symbol for NAME
    Validate { name: String, symbol: String },
    /// List every valid symbol for NAME
    All { name: String },
    /// Print the alphabetically first symbol for NAME
    First { name: String },
    /// Count the distinct symbols for NAME
    Count { name: String },
    /// Read "Name, Sy" or "Name, Sy -> true" lines from stdin
    Check,
    /// Run the self-test cases and print a PASS/FAIL report
    SelfTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub format: Format,
    /// Case file given on the command line
    pub cli_cases: Option<PathBuf>,
    /// Case file in the user config directory
    pub user_cases: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let user_cases = dirs::config_dir()
            .map(|dir| dir.join("element-symbols").join("cases.toml"))
            .filter(|path| path.is_file());

        Ok(Config {
            command: args.command,
            format: args.format,
            cli_cases: args.cases,
            user_cases,
            log_level: args.log_level,
        })
    }

    /// Case file to run, `None` meaning the embedded one
    pub fn get_effective_cases(&self) -> Option<PathBuf> {
        self.cli_cases.clone().or_else(|| self.user_cases.clone())
    }
}
