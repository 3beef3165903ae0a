//! ytcut
//!
//! A command-line tool that cuts a time range out of an online video and
//! saves it as mp4, mp3 or wav.
//!
//! # Usage
//!
//! ```bash
//! ytcut cut --url "https://www.youtube.com/watch?v=..." --start 00:30 --end 01:00
//! ytcut cut --url "https://www.youtube.com/watch?v=..." --format mp3 --save-to ~/Music
//! ytcut clean
//! ytcut formats
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ytcut_cli::app::container::DefaultAppContainer;
use ytcut_cli::cli::{commands, Cli, Commands};
use ytcut_cli::config_initialization::initialize_configuration;
use ytcut_cli::utils::logging::init_logging;

/// Main entry point for the ytcut CLI application
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let cli = Cli::parse();

    let resolved = initialize_configuration(&cli).context("Failed to load configuration")?;
    init_logging(&resolved.config.logging()).context("Failed to initialize logging")?;
    resolved.log_resolution();
    let config = resolved.config;

    info!(workspace = %config.workspace_dir.display(), engine = %config.engine_binary, "Starting ytcut");

    let quiet = matches!(&cli.command, Commands::Cut(args) if args.json);
    let container = DefaultAppContainer::new(&config, quiet);

    // Execute the requested command
    let code = match cli.command {
        Commands::Cut(args) => commands::cut(&container, &config, args)
            .await
            .context("Cut command failed")?,
        Commands::Clean(args) => commands::clean(&container, args)
            .await
            .context("Clean command failed")?,
        Commands::Formats(args) => commands::formats(&container, args)?,
    };

    Ok(code)
}
