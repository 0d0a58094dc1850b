//! GDPR review CLI
//!
//! Command-line interface for local reviews and for probing a running server.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use presentation_cli::{
    Cli, Commands,
    cli::log_filter_from_verbosity,
    commands::{self, EXIT_FAILURE, Outcome},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity; RUST_LOG still wins
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(Outcome { output, code }) => {
            println!("{output}");
            ExitCode::from(code)
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Extract { file } => {
            commands::ensure_exists(&file)?;
            let config = commands::load_config(cli.config.as_deref()).await?;
            commands::extract(&config, &file).await
        },

        Commands::Review { file, json } => {
            commands::ensure_exists(&file)?;
            let config = commands::load_config(cli.config.as_deref()).await?;
            let components = commands::components(&config)?;
            commands::review(&components, &file, json).await
        },

        Commands::Remote { file, url, json } => {
            commands::ensure_exists(&file)?;
            commands::remote(&client, &url, &file, json).await
        },

        Commands::Status { url } => commands::status(&client, &url).await,

        Commands::Health { url } => Ok(commands::health(&client, &url).await),
    }
}
