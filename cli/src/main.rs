//! # portal-mgmt Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `portal-mgmt` CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in the library crate
//! - Mapping command results to process exit statuses
//!
//! ## Exit Statuses
//!
//! - `0`: success, including a declined confirmation or an empty archive
//! - `1`: fatal error (for example the import file does not exist)
//! - `2`: the remote import failed
//!
//! ## Examples
//!
//! ```bash
//! portal-mgmt --help
//! portal-mgmt -v import --importfile site.zip
//! portal-mgmt get mop --ct json
//! ```
//!
use clap::Parser;
use portal_mgmt::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "portal-mgmt",
    about = "Portal management tooling: archive import and managed resources",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "i")]
    Import(commands::import::ImportArgs),
    Get(commands::get::GetArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Import(args) => commands::import::handle_import(args)
            .await
            .map(|outcome| outcome.exit_code()),
        Commands::Get(args) => commands::get::handle_get(args).await.map(|()| 0),
    };

    match command_result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("Command execution failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
