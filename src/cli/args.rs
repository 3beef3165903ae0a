//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Video URL
    #[arg(short, long)]
    pub url: String,

    /// Output format
    #[arg(short, long, default_value = "mp4", value_parser = ["mp4", "mp3", "wav"])]
    pub format: String,

    /// Start time (MM:SS, HH:MM:SS, or seconds)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (MM:SS, HH:MM:SS, or seconds)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Save the result into this directory as cut_video.<ext>
    #[arg(long, value_name = "DIR")]
    pub save_to: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Print the cleanup report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the formats command
#[derive(Args, Debug)]
pub struct FormatsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
