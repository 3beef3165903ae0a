// Terminal view adapter - Renders run states on the console

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::model::*;
use crate::ports::*;
use crate::utils::Utils;

/// Console view with a spinner as the busy indicator
pub struct TerminalViewAdapter {
    spinner: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl TerminalViewAdapter {
    /// Create new terminal view; a quiet view draws nothing
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet,
        }
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn stop_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }

    /// Text block describing the preview and the save action
    pub fn render_success(message: &str, preview: &Preview, offer: &DownloadOffer) -> String {
        format!(
            "{}\n\nPreview\n  Player:  {}\n  File:    {}\n  Size:    {}\n  Type:    {}\n\n{}\n  Name:    {}\n  Type:    {}\n  Use --save-to <DIR> to save it.\n",
            message,
            preview.kind,
            preview.path.display(),
            Utils::format_file_size(preview.size_bytes),
            preview.mime_type,
            offer.label,
            offer.file_name,
            offer.mime_type,
        )
    }
}

#[async_trait]
impl ViewPort for TerminalViewAdapter {
    async fn show_busy(&self, message: &str) {
        if self.quiet {
            return;
        }
        if let Ok(mut guard) = self.spinner.lock() {
            if let Some(old) = guard.replace(Self::create_spinner(message)) {
                old.finish_and_clear();
            }
        }
    }

    async fn show_success(&self, message: &str, preview: &Preview, offer: &DownloadOffer) {
        self.stop_spinner();
        if !self.quiet {
            print!("{}", Self::render_success(message, preview, offer));
        }
    }

    async fn show_error(&self, message: &str) {
        self.stop_spinner();
        if !self.quiet {
            eprintln!("error: {}", message);
        }
    }
}
