//! CLI module for ytcut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{CleanArgs, CutArgs, FormatsArgs};

/// ytcut - cut a time range out of an online video
///
/// Downloads only the requested range through yt-dlp and saves it as mp4,
/// mp3 or wav, with a preview description and a save action.
#[derive(Parser, Debug)]
#[command(name = "ytcut")]
#[command(about = "ytcut - Cut a time range out of an online video")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./ytcut.toml when present)
    #[arg(long, env = "YTCUT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Working directory for temporary outputs
    #[arg(long, env = "YTCUT_WORKSPACE", global = true)]
    pub workspace: Option<PathBuf>,

    /// Extraction engine binary
    #[arg(long, env = "YTCUT_ENGINE", global = true)]
    pub engine: Option<String>,

    /// Target mp3 bitrate in kbit/s
    #[arg(long, env = "YTCUT_MP3_QUALITY", global = true)]
    pub mp3_quality: Option<u32>,

    /// Logging level or filter directive
    #[arg(long, env = "YTCUT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, env = "YTCUT_LOG_FORMAT", global = true, value_parser = ["pretty", "compact", "json"])]
    pub log_format: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut a range out of a video URL and preview it
    Cut(args::CutArgs),
    /// Remove stale outputs left in the workspace by earlier runs
    Clean(args::CleanArgs),
    /// List the supported output formats
    Formats(args::FormatsArgs),
}
