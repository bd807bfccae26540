//! Command-line argument definitions for the balance data loader

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::resolve_data_dir;
use crate::{Error, Result};

/// CLI arguments for the balance data loader
///
/// Loads and validates tab-separated game balance tables (class stats,
/// experience curves) against their compile-time schemas.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "balancedat",
    version,
    about = "Load and validate tab-separated game balance tables",
    long_about = "Loads fixed-schema, tab-separated balance tables (character class stats, \
                  experience curves), validates their shape against the expected column \
                  schemas, and converts every cell into a strongly-typed value. Any unknown \
                  column, missing column, short row, or malformed cell fails the whole table \
                  - shipped balance data is either fully correct or rejected."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate every known balance table and report per-resource status
    Validate(ValidateArgs),
    /// Load the balance tables and print their typed contents
    Show(ShowArgs),
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Directory containing the table files
    ///
    /// Defaults to the platform data directory for balancedat.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing the balance table files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Output format for the validation report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Directory containing the table files
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory containing the balance table files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Restrict output to one table
    #[arg(
        short = 't',
        long = "table",
        value_enum,
        help = "Show only the named table"
    )]
    pub table: Option<TableSelector>,

    /// Output format for table contents
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for table contents"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Which balance table the show command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableSelector {
    /// Experience curve table
    Experience,
    /// Character class stat table
    Classes,
}

impl ValidateArgs {
    /// Validate the command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(self.data_dir.as_deref())
    }

    /// The effective data directory
    pub fn get_data_dir(&self) -> PathBuf {
        resolve_data_dir(self.data_dir.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

impl ShowArgs {
    /// Validate the command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(self.data_dir.as_deref())
    }

    /// The effective data directory
    pub fn get_data_dir(&self) -> PathBuf {
        resolve_data_dir(self.data_dir.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn validate_data_dir(data_dir: Option<&std::path::Path>) -> Result<()> {
    if let Some(data_dir) = data_dir {
        if !data_dir.exists() {
            return Err(Error::configuration(format!(
                "data directory does not exist: {}",
                data_dir.display()
            )));
        }
        if !data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "data path is not a directory: {}",
                data_dir.display()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_args_accept_existing_dir() {
        let temp_dir = TempDir::new().unwrap();

        let args = ValidateArgs {
            data_dir: Some(temp_dir.path().to_path_buf()),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());
        assert_eq!(args.get_data_dir(), temp_dir.path());
    }

    #[test]
    fn test_validate_args_reject_missing_dir() {
        let args = ValidateArgs {
            data_dir: Some(PathBuf::from("/nonexistent/path")),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = ValidateArgs {
            data_dir: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_command_parsing() {
        let args = Args::parse_from(["balancedat", "validate", "--format", "json"]);
        match args.command {
            Some(Commands::Validate(validate)) => {
                assert_eq!(validate.output_format, OutputFormat::Json);
            }
            other => panic!("expected validate command, got {other:?}"),
        }

        let args = Args::parse_from(["balancedat", "show", "--table", "experience"]);
        match args.command {
            Some(Commands::Show(show)) => {
                assert_eq!(show.table, Some(TableSelector::Experience));
            }
            other => panic!("expected show command, got {other:?}"),
        }
    }
}
