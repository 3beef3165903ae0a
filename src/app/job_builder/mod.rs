// Job request builder - Turns raw user input into an extraction job

use std::path::PathBuf;

use tracing::debug;

use crate::domain::errors::InputError;
use crate::domain::model::*;
use crate::domain::rules::FormatRules;
use crate::utils::time::TimeParser;

/// Raw values from the user-facing controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutRequest {
    pub url: String,
    pub format: OutputFormat,
    pub start_time: String,
    pub end_time: String,
}

impl CutRequest {
    pub fn new(
        url: impl Into<String>,
        format: OutputFormat,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            format,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Builds the job and its engine options; validation happens here, locally
#[derive(Debug, Clone)]
pub struct JobRequestBuilder {
    rules: FormatRules,
    time_parser: TimeParser,
    workspace: PathBuf,
    name_prefix: String,
    no_playlist: bool,
}

impl JobRequestBuilder {
    pub fn new(
        rules: FormatRules,
        workspace: impl Into<PathBuf>,
        name_prefix: impl Into<String>,
        no_playlist: bool,
    ) -> Self {
        Self {
            rules,
            time_parser: TimeParser::new(),
            workspace: workspace.into(),
            name_prefix: name_prefix.into(),
            no_playlist,
        }
    }

    /// Reject an empty source URL
    pub fn validate_url<'a>(&self, url: &'a str) -> Result<&'a str, InputError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        Ok(url)
    }

    /// Parse both timestamps and check that the range is not empty
    pub fn parse_range(&self, start_time: &str, end_time: &str) -> Result<TimeRange, InputError> {
        let start = self.time_parser.parse_time(start_time);
        let end = self.time_parser.parse_time(end_time);
        debug!(start, end, "Parsed cut range");
        TimeRange::new(start, end)
    }

    /// Create a fresh job for an already-validated URL and range
    pub fn build_job(&self, url: &str, format: OutputFormat, range: TimeRange) -> ExtractionJob {
        ExtractionJob {
            source_url: url.to_string(),
            range,
            format,
            output_name_base: OutputNameBase::generate(&self.name_prefix),
            workspace: self.workspace.clone(),
        }
    }

    /// Engine options record for a job
    pub fn engine_options(&self, job: &ExtractionJob) -> EngineOptions {
        self.rules.engine_options(job, self.no_playlist)
    }
}
