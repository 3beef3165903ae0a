//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use tracing::{debug, info};

use crate::adapters::{AppConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::CutterResult;
use crate::utils::logging::LogFormat;

/// Configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
    /// Number of values taken from flags or the environment
    pub overrides: usize,
}

impl ResolvedConfig {
    /// Report how the configuration was resolved; call once logging is up
    pub fn log_resolution(&self) {
        match &self.source {
            Some(path) => info!(path = %path.display(), "Loaded configuration file"),
            None => debug!("No configuration file found, using defaults"),
        }
        debug!(overrides = self.overrides, config = ?self.config, "Configuration resolved");
    }
}

/// Resolve configuration following precedence: CLI > Env > File > Defaults
///
/// Environment variables are folded into the CLI values by clap, so this
/// only layers the file over the defaults and the flags over the file.
/// Nothing is logged here since the subscriber depends on the result.
pub fn initialize_configuration(cli: &Cli) -> CutterResult<ResolvedConfig> {
    let (mut config, source) = TomlConfigAdapter::load_or_default(cli.config.as_deref())?;
    let overrides = apply_cli_overrides(&mut config, cli)?;
    config.validate()?;

    Ok(ResolvedConfig {
        config,
        source,
        overrides,
    })
}

/// Apply CLI (and environment) overrides, returning how many were applied
fn apply_cli_overrides(config: &mut AppConfig, cli: &Cli) -> CutterResult<usize> {
    let mut overrides = 0;

    if let Some(workspace) = &cli.workspace {
        config.workspace_dir = workspace.clone();
        overrides += 1;
    }
    if let Some(engine) = &cli.engine {
        config.engine_binary = engine.clone();
        overrides += 1;
    }
    if let Some(quality) = cli.mp3_quality {
        config.mp3_quality = quality;
        overrides += 1;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
        overrides += 1;
    }
    if let Some(format) = &cli.log_format {
        config.log_format = LogFormat::parse(format)?;
        overrides += 1;
    }

    Ok(overrides)
}
