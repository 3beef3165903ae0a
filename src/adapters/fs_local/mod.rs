// Local filesystem adapter - File system operations on the working directory

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
#[derive(Debug, Default)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                DomainError::FsFail(format!("Failed to read {}: {}", dir.display(), e))
            })?;
            entries.push(entry.into_path());
        }
        Ok(entries)
    }

    async fn remove_file(&self, file_path: &Path) -> Result<(), DomainError> {
        fs::remove_file(file_path).map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", file_path.display(), e))
        })
    }

    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        Ok(file_path.is_file())
    }

    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
        let metadata = fs::metadata(file_path)
            .map_err(|e| DomainError::FsFail(format!("Failed to get file size: {}", e)))?;
        Ok(metadata.len())
    }

    async fn stream_copy(&self, from: &Path, to: &Path) -> Result<u64, DomainError> {
        if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::FsFail(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let source = fs::File::open(from).map_err(|e| {
            DomainError::FsFail(format!("Failed to open {}: {}", from.display(), e))
        })?;
        let target = fs::File::create(to).map_err(|e| {
            DomainError::FsFail(format!("Failed to create {}: {}", to.display(), e))
        })?;

        let mut reader = BufReader::new(source);
        let mut writer = BufWriter::new(target);
        let copied = std::io::copy(&mut reader, &mut writer).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to copy {} to {}: {}",
                from.display(),
                to.display(),
                e
            ))
        })?;
        writer
            .flush()
            .map_err(|e| DomainError::FsFail(format!("Failed to flush {}: {}", to.display(), e)))?;

        Ok(copied)
    }
}
