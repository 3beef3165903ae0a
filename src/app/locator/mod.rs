// Result locator - Finds the file the engine produced for a job

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::model::*;
use crate::ports::FsPort;

/// Looks for `<output_name_base>.<expected extension>` in the job workspace
pub struct ResultLocator {
    fs_port: Arc<dyn FsPort>,
}

impl ResultLocator {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self { fs_port }
    }

    /// Return the produced file, or `None` when nothing is at the expected path
    ///
    /// A filesystem error while checking counts as absence.
    pub async fn locate(&self, job: &ExtractionJob) -> Option<ExtractionResult> {
        let path = job.expected_path();

        match self.fs_port.file_exists(&path).await {
            Ok(true) => {}
            Ok(false) => {
                debug!(path = %path.display(), "Expected output is missing");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not check expected output");
                return None;
            }
        }

        let size_bytes = match self.fs_port.file_size(&path).await {
            Ok(size) => size,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read output size");
                0
            }
        };

        Some(ExtractionResult {
            path,
            format: job.format,
            size_bytes,
        })
    }
}
