//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default server URL for remote commands
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// GDPR review CLI
#[derive(Debug, Parser)]
#[command(name = "gdpr-review-cli")]
#[command(author, version, about = "Review agreements for GDPR compliance", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "GDPR_REVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract and print the clauses of a PDF without contacting the model
    Extract {
        /// PDF file to read
        file: PathBuf,
    },

    /// Review a PDF locally with the configured model
    ///
    /// Exits with 0 when the agreement is fully compliant and 2 when it is not.
    Review {
        /// PDF file to review
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a PDF to a running server for review
    Remote {
        /// PDF file to review
        file: PathBuf,

        /// Server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check system status
    Status {
        /// Server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },

    /// Check system health (used by Docker healthcheck)
    Health {
        /// Server URL
        #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
        url: String,
    },
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
