// TOML config adapter - Configuration loading from TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::rules::DEFAULT_MP3_QUALITY;
use crate::error::{CutterError, CutterResult};
use crate::utils::logging::{LogFormat, LoggingConfig};

/// Config file looked up in the current directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "ytcut.toml";

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External engine binary
    pub engine_binary: String,
    /// Working directory for run outputs
    pub workspace_dir: PathBuf,
    /// Reserved prefix of run output names
    pub temp_prefix: String,
    /// Target mp3 bitrate in kbit/s
    pub mp3_quality: u32,
    pub default_start: String,
    pub default_end: String,
    /// Cut only the linked video when the URL also names a playlist
    pub no_playlist: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine_binary: "yt-dlp".to_string(),
            workspace_dir: PathBuf::from("."),
            temp_prefix: "temp_".to_string(),
            mp3_quality: DEFAULT_MP3_QUALITY,
            default_start: "00:00".to_string(),
            default_end: "00:10".to_string(),
            no_playlist: true,
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Logging settings carried by this configuration
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CutterResult<()> {
        if self.engine_binary.trim().is_empty() {
            return Err(CutterError::Config {
                message: "engine_binary cannot be empty".to_string(),
            });
        }
        if self.temp_prefix.is_empty() {
            return Err(CutterError::Config {
                message: "temp_prefix cannot be empty".to_string(),
            });
        }
        if self.mp3_quality == 0 {
            return Err(CutterError::Config {
                message: "mp3_quality must be a positive bitrate".to_string(),
            });
        }
        Ok(())
    }
}

/// File layout: every key lives under a `[ytcut]` table
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ytcut: AppConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration from TOML text
    pub fn parse(toml_content: &str, origin: &str) -> CutterResult<AppConfig> {
        let file: ConfigFile =
            toml::from_str(toml_content).map_err(|source| CutterError::ConfigParse {
                path: origin.to_string(),
                source,
            })?;
        Ok(file.ytcut)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> CutterResult<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| CutterError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load an explicit file, or the default file when it exists, or defaults
    ///
    /// Also returns the file the configuration came from, if any.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> CutterResult<(AppConfig, Option<PathBuf>)> {
        let source = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };
        match source {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((AppConfig::default(), None)),
        }
    }
}
