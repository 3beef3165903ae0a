// Workspace cleaner - Best-effort removal of stale run outputs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::model::OutputFormat;
use crate::ports::FsPort;

/// Files touched by one cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Removes `<prefix>*.{mp4,mp3,wav}` files left behind by earlier runs
///
/// This is a non-fatal side task: listing or removal failures are logged and
/// recorded in the report, never returned to the caller.
pub struct WorkspaceCleaner {
    fs_port: Arc<dyn FsPort>,
    prefix: String,
}

impl WorkspaceCleaner {
    pub fn new(fs_port: Arc<dyn FsPort>, prefix: impl Into<String>) -> Self {
        Self {
            fs_port,
            prefix: prefix.into(),
        }
    }

    /// Check whether a file name is a stale run output
    pub fn is_stale_output(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
            && OutputFormat::ALL
                .iter()
                .any(|format| file_name.ends_with(&format!(".{}", format.extension())))
    }

    /// Scan the immediate entries of `dir` and remove stale outputs
    pub async fn clean(&self, dir: &Path) -> CleanupReport {
        let mut report = CleanupReport::default();

        let entries = match self.fs_port.list_entries(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping workspace cleanup");
                return report;
            }
        };

        for path in entries {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !self.is_stale_output(file_name) {
                continue;
            }

            match self.fs_port.remove_file(&path).await {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed stale output");
                    report.removed.push(path);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not remove stale output");
                    report.failed.push(path);
                }
            }
        }

        if !report.removed.is_empty() || !report.failed.is_empty() {
            info!(
                removed = report.removed.len(),
                failed = report.failed.len(),
                "Workspace cleanup finished"
            );
        }

        report
    }
}
