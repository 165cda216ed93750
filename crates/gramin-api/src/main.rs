//! GraminHealth CLI entry point.
//!
//! Binary name: `gramin`
//!
//! Parses CLI arguments, loads configuration and the remote service, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,gramin_core=debug,gramin_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // The emergency directory is static and needs no state
    if let Commands::Emergency = &cli.command {
        cli::emergency::show_directory(cli.json);
        return Ok(());
    }

    let state = AppState::init().await;

    match cli.command {
        Commands::Chat => {
            cli::chat::run_chat_loop(&state).await?;
        }
        Commands::Locate { lat, lon } => {
            cli::locate::run_locate(&state, lat, lon, cli.json).await?;
        }
        Commands::Emergency => unreachable!("handled above"),
    }

    Ok(())
}
