// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for the external download/transcode engine
#[async_trait]
pub trait ExtractionPort: Send + Sync {
    /// Run the job to completion; blocks the caller until the engine returns
    ///
    /// Success means only that the engine did not raise. Whether it actually
    /// produced the expected file is checked separately.
    async fn execute(
        &self,
        job: &ExtractionJob,
        options: &EngineOptions,
    ) -> Result<(), EngineFailure>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// List the immediate entries of a directory
    async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError>;

    /// Delete file
    async fn remove_file(&self, file_path: &Path) -> Result<(), DomainError>;

    /// Check if a regular file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Get file size
    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError>;

    /// Stream the bytes of `from` into `to`, returning the number of bytes copied
    async fn stream_copy(&self, from: &Path, to: &Path) -> Result<u64, DomainError>;
}

/// Port for rendering run states to the user
#[async_trait]
pub trait ViewPort: Send + Sync {
    /// Show the busy indicator while the engine runs
    async fn show_busy(&self, message: &str);

    /// Render the preview and the save action
    async fn show_success(&self, message: &str, preview: &Preview, offer: &DownloadOffer);

    /// Render a single human-readable error message
    async fn show_error(&self, message: &str);
}
