// Presenter - Run state machine and rendering of terminal outcomes

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::{FsPort, ViewPort};

/// Shown for the whole duration of an engine run
pub const BUSY_MESSAGE: &str =
    "Downloading and processing the video... (this can take a few seconds to a minute)";

/// Shown above the preview on success
pub const SUCCESS_MESSAGE: &str = "Done! Check the preview below.";

/// Shown when the engine returned but the expected file is missing
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate the file.";

/// Display state of the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Success,
    InputError,
    GenerationFailed,
    EngineError,
}

/// Terminal outcome of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunOutcome {
    Success {
        message: String,
        preview: Preview,
        download: DownloadOffer,
    },
    InputError {
        message: String,
        error: InputError,
    },
    GenerationFailed {
        message: String,
        expected_path: PathBuf,
    },
    EngineError {
        message: String,
        failure: EngineFailure,
    },
}

impl RunOutcome {
    pub fn state(&self) -> RunState {
        match self {
            RunOutcome::Success { .. } => RunState::Success,
            RunOutcome::InputError { .. } => RunState::InputError,
            RunOutcome::GenerationFailed { .. } => RunState::GenerationFailed,
            RunOutcome::EngineError { .. } => RunState::EngineError,
        }
    }

    /// The single human-readable message for this outcome
    pub fn message(&self) -> &str {
        match self {
            RunOutcome::Success { message, .. }
            | RunOutcome::InputError { message, .. }
            | RunOutcome::GenerationFailed { message, .. }
            | RunOutcome::EngineError { message, .. } => message,
        }
    }
}

/// Drives the view through `Idle -> Running -> terminal state`
///
/// A new run goes straight back to `Running`; there is no return to `Idle`.
pub struct Presenter {
    view_port: Arc<dyn ViewPort>,
    fs_port: Arc<dyn FsPort>,
    state: RunState,
    outcome: Option<RunOutcome>,
}

impl Presenter {
    pub fn new(view_port: Arc<dyn ViewPort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            view_port,
            fs_port,
            state: RunState::Idle,
            outcome: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Outcome of the last finished run
    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    /// Enter `Running` and show the busy indicator
    pub async fn begin(&mut self) {
        self.state = RunState::Running;
        self.outcome = None;
        self.view_port.show_busy(BUSY_MESSAGE).await;
    }

    /// Report a local validation failure
    pub async fn reject_input(&mut self, error: InputError) {
        info!(error = ?error, "Input rejected");
        let message = error.to_string();
        self.finish_with_error(RunOutcome::InputError { message, error })
            .await;
    }

    /// Report that the engine returned without producing the expected file
    pub async fn fail_generation(&mut self, expected_path: PathBuf) {
        error!(path = %expected_path.display(), "Engine produced no output");
        self.finish_with_error(RunOutcome::GenerationFailed {
            message: GENERATION_FAILED_MESSAGE.to_string(),
            expected_path,
        })
        .await;
    }

    /// Report an engine failure with its message text
    pub async fn fail_engine(&mut self, failure: EngineFailure) {
        error!(kind = ?failure.kind, message = %failure.message, "Engine failed");
        self.finish_with_error(RunOutcome::EngineError {
            message: failure.to_string(),
            failure,
        })
        .await;
    }

    /// Render the preview and offer the save action
    pub async fn succeed(&mut self, result: &ExtractionResult) {
        let preview = Preview::from(result);
        let download = DownloadOffer::for_result(result);
        info!(path = %result.path.display(), size = result.size_bytes, "Clip ready");

        self.view_port
            .show_success(SUCCESS_MESSAGE, &preview, &download)
            .await;
        self.state = RunState::Success;
        self.outcome = Some(RunOutcome::Success {
            message: SUCCESS_MESSAGE.to_string(),
            preview,
            download,
        });
    }

    /// Save action: stream the produced file into `dest_dir` as `cut_video.<ext>`
    pub async fn save(&self, dest_dir: &Path) -> Result<PathBuf, DomainError> {
        let Some(RunOutcome::Success { download, .. }) = &self.outcome else {
            return Err(DomainError::BadArgs(
                "Nothing to save: the last run did not succeed".to_string(),
            ));
        };

        let destination = download.destination_in(dest_dir);
        let bytes = self
            .fs_port
            .stream_copy(&download.source_path, &destination)
            .await?;
        info!(path = %destination.display(), bytes, mime = %download.mime_type, "Saved clip");
        Ok(destination)
    }

    async fn finish_with_error(&mut self, outcome: RunOutcome) {
        self.view_port.show_error(outcome.message()).await;
        self.state = outcome.state();
        self.outcome = Some(outcome);
    }
}
