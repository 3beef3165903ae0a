// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, InputError};
use crate::utils::time::TimeParser;

/// Range to cut out of the source, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start_seconds: u64,
    pub end_seconds: u64,
}

impl TimeRange {
    /// Create a new range; `end_seconds` must be strictly after `start_seconds`
    pub fn new(start_seconds: u64, end_seconds: u64) -> Result<Self, InputError> {
        if end_seconds <= start_seconds {
            return Err(InputError::InvalidRange {
                start: start_seconds,
                end: end_seconds,
            });
        }

        Ok(Self {
            start_seconds,
            end_seconds,
        })
    }

    /// Length of the range in seconds
    pub fn duration_seconds(&self) -> u64 {
        self.end_seconds - self.start_seconds
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parser = TimeParser::new();
        write!(
            f,
            "{}-{}",
            parser.format_time(self.start_seconds),
            parser.format_time(self.end_seconds)
        )
    }
}

/// Output format the user picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Video container
    Mp4,
    /// Lossy audio at a fixed bitrate
    Mp3,
    /// Lossless audio
    Wav,
}

impl OutputFormat {
    /// Every recognized format, in selector order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Mp4, OutputFormat::Mp3, OutputFormat::Wav];

    /// Parse output format from string
    pub fn parse(format_str: &str) -> Result<Self, DomainError> {
        match format_str.trim().to_lowercase().as_str() {
            "mp4" => Ok(OutputFormat::Mp4),
            "mp3" => Ok(OutputFormat::Mp3),
            "wav" => Ok(OutputFormat::Wav),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid format: {}. Valid formats: mp4, mp3, wav",
                format_str
            ))),
        }
    }

    /// Extension of the file the engine writes
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
        }
    }

    /// MIME type used when the file is offered for download
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "video/mp4",
            OutputFormat::Mp3 => "audio/mp3",
            OutputFormat::Wav => "audio/wav",
        }
    }

    /// Widget used to preview the result
    pub fn preview_kind(&self) -> PreviewKind {
        match self {
            OutputFormat::Mp4 => PreviewKind::VideoPlayer,
            OutputFormat::Mp3 | OutputFormat::Wav => PreviewKind::AudioPlayer,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Preview widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewKind {
    VideoPlayer,
    AudioPlayer,
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewKind::VideoPlayer => f.write_str("video player"),
            PreviewKind::AudioPlayer => f.write_str("audio player"),
        }
    }
}

/// Filename stem correlating a job with the file the engine writes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OutputNameBase(String);

impl OutputNameBase {
    /// Generate a fresh name: `<prefix><unix seconds>_<random token>`
    pub fn generate(prefix: &str) -> Self {
        let timestamp = chrono::Utc::now().timestamp();
        let token = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{}{}_{}", prefix, timestamp, token))
    }

    /// Wrap an existing stem
    pub fn from_stem(stem: impl Into<String>) -> Self {
        Self(stem.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the engine is expected to produce for `format`
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.0, format.extension())
    }
}

impl fmt::Display for OutputNameBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the engine needs for one run; never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionJob {
    pub source_url: String,
    pub range: TimeRange,
    pub format: OutputFormat,
    pub output_name_base: OutputNameBase,
    /// Directory the engine writes into
    pub workspace: PathBuf,
}

impl ExtractionJob {
    /// Path the engine output is expected at
    pub fn expected_path(&self) -> PathBuf {
        self.workspace
            .join(self.output_name_base.file_name(self.format))
    }

    /// Output template handed to the engine; it picks the real extension
    pub fn output_template(&self) -> String {
        self.workspace
            .join(format!("{}.%(ext)s", self.output_name_base))
            .to_string_lossy()
            .to_string()
    }
}

/// File located after a successful engine run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub size_bytes: u64,
}

/// Inline preview of the produced file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub kind: PreviewKind,
    pub path: PathBuf,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl From<&ExtractionResult> for Preview {
    fn from(result: &ExtractionResult) -> Self {
        Self {
            kind: result.format.preview_kind(),
            path: result.path.clone(),
            mime_type: result.format.mime_type().to_string(),
            size_bytes: result.size_bytes,
        }
    }
}

/// Save action offered after success
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadOffer {
    pub label: String,
    pub file_name: String,
    pub mime_type: String,
    pub source_path: PathBuf,
}

impl DownloadOffer {
    /// Fixed download name for every run
    pub const FILE_STEM: &'static str = "cut_video";

    pub fn for_result(result: &ExtractionResult) -> Self {
        Self {
            label: format!("Save {} file", result.format.extension().to_uppercase()),
            file_name: format!("{}.{}", Self::FILE_STEM, result.format.extension()),
            mime_type: result.format.mime_type().to_string(),
            source_path: result.path.clone(),
        }
    }

    /// Destination path when saving into `dir`
    pub fn destination_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// One `[start, end)` cut handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeCut {
    pub start_time: u64,
    pub end_time: u64,
}

/// Post-processing directive applied after retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostProcessor {
    pub key: String,
    pub preferred_codec: String,
    pub preferred_quality: Option<String>,
}

/// Declarative options record submitted to the extraction engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineOptions {
    pub output_template: String,
    pub download_ranges: Vec<RangeCut>,
    pub force_keyframes_at_cuts: bool,
    pub format: String,
    pub merge_output_format: Option<String>,
    pub postprocessors: Vec<PostProcessor>,
    pub no_playlist: bool,
}
