//! yt-dlp execution adapter
//!
//! Runs the external `yt-dlp` binary for one extraction job. The declarative
//! [`EngineOptions`] record is rendered into command-line flags; the engine
//! picks the final extension itself through the `%(ext)s` output template.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Post-processor key understood by this adapter
const EXTRACT_AUDIO: &str = "FFmpegExtractAudio";

/// Number of trailing stderr lines kept when no `ERROR:` line is found
const STDERR_TAIL_LINES: usize = 5;

/// yt-dlp based extraction adapter
#[derive(Debug, Clone)]
pub struct YtDlpAdapter {
    binary: String,
}

impl YtDlpAdapter {
    /// Create new adapter running `binary`
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Render the options record as yt-dlp arguments
    pub fn build_args(options: &EngineOptions, url: &str) -> Vec<String> {
        let mut args = vec!["-o".to_string(), options.output_template.clone()];

        for range in &options.download_ranges {
            args.push("--download-sections".to_string());
            args.push(format!("*{}-{}", range.start_time, range.end_time));
        }
        if options.force_keyframes_at_cuts {
            args.push("--force-keyframes-at-cuts".to_string());
        }

        args.push("-f".to_string());
        args.push(options.format.clone());

        if let Some(container) = &options.merge_output_format {
            args.push("--merge-output-format".to_string());
            args.push(container.clone());
        }

        for pp in options
            .postprocessors
            .iter()
            .filter(|pp| pp.key == EXTRACT_AUDIO)
        {
            args.push("-x".to_string());
            args.push("--audio-format".to_string());
            args.push(pp.preferred_codec.clone());
            if let Some(quality) = &pp.preferred_quality {
                args.push("--audio-quality".to_string());
                args.push(format!("{}K", quality));
            }
        }

        if options.no_playlist {
            args.push("--no-playlist".to_string());
        }
        args.push("--no-progress".to_string());

        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// Pick the engine's error text out of its stderr
    pub fn failure_message(stderr: &str, status: &str) -> String {
        let error_lines: Vec<&str> = stderr
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("ERROR:"))
            .collect();
        if !error_lines.is_empty() {
            return error_lines.join("\n");
        }

        let lines: Vec<&str> = stderr
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return format!("yt-dlp exited with {}", status);
        }

        let tail_start = lines.len().saturating_sub(STDERR_TAIL_LINES);
        lines[tail_start..].join("\n")
    }
}

impl Default for YtDlpAdapter {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl ExtractionPort for YtDlpAdapter {
    async fn execute(
        &self,
        job: &ExtractionJob,
        options: &EngineOptions,
    ) -> Result<(), EngineFailure> {
        let args = Self::build_args(options, &job.source_url);
        debug!(binary = %self.binary, ?args, "Spawning engine");

        let started = Instant::now();
        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                EngineFailure::new(
                    EngineFailureKind::Unknown,
                    format!("could not run '{}': {}", self.binary, e),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            debug!(target: "ytcut::engine", "{}", line);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = Self::failure_message(&stderr, &output.status.to_string());
            return Err(EngineFailure::from_message(message));
        }

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Engine finished"
        );
        Ok(())
    }
}
