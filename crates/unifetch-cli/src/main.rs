//! unifetch CLI - Main entry point

use clap::Parser;
use std::process;
use tracing::error;
use unifetch_cli::{Cli, Commands, Config, ConfigCommand};
use unifetch_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};

#[tokio::main]
async fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Verbose: debug to console. Otherwise only warnings and errors.
    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    let defaults = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("unifetch")
        .build();

    // Environment variables take precedence
    let log_config = defaults.clone().with_env().unwrap_or(defaults);

    // The CLI works without logging
    let log_guard = init_logging(&log_config).ok();

    let result = execute_command(&cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);

        // Flush file logs before exiting
        drop(log_guard);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> unifetch_cli::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(ref url) = cli.base_url {
        config.set_base_url(url.clone());
    }

    match &cli.command {
        Commands::Fetch { accession, format } => {
            unifetch_cli::commands::fetch::run(accession.clone(), format.clone(), &config).await
        },

        Commands::Export { accession, output } => {
            unifetch_cli::commands::export::run(accession.clone(), output.clone(), &config).await
        },

        Commands::Config { command } => match command {
            ConfigCommand::Get { key } => unifetch_cli::commands::config::get(key, &config),
            ConfigCommand::Show => unifetch_cli::commands::config::show(&config),
        },
    }
}
