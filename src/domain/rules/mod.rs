// Domain rules - Format policy and engine option mapping

use serde::Serialize;

use crate::domain::model::*;

/// Default target bitrate for mp3 output, in kbit/s
pub const DEFAULT_MP3_QUALITY: u32 = 192;

/// Engine post-processor that extracts and re-encodes the audio track
const EXTRACT_AUDIO: &str = "FFmpegExtractAudio";

/// Recognized options for one output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatProfile {
    pub format: OutputFormat,
    /// Source stream selection handed to the engine
    pub stream_selector: String,
    /// Container to merge separate video and audio streams into
    pub merge_container: Option<String>,
    /// Audio extraction applied after download
    pub post_processor: Option<PostProcessor>,
    pub extension: String,
    pub preview: PreviewKind,
    pub mime_type: String,
}

impl FormatProfile {
    /// Human-readable post-processing column for listings
    pub fn post_processing_summary(&self) -> String {
        match (&self.merge_container, &self.post_processor) {
            (Some(container), _) => format!("merge into {}", container),
            (None, Some(pp)) => match &pp.preferred_quality {
                Some(quality) => format!("extract audio as {} @ {}k", pp.preferred_codec, quality),
                None => format!("extract audio as {} (lossless)", pp.preferred_codec),
            },
            (None, None) => "none".to_string(),
        }
    }
}

/// Business rules mapping an output format to its engine options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRules {
    mp3_quality: u32,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self::new(DEFAULT_MP3_QUALITY)
    }
}

impl FormatRules {
    pub fn new(mp3_quality: u32) -> Self {
        Self { mp3_quality }
    }

    /// Configuration bundle for `format`
    pub fn profile(&self, format: OutputFormat) -> FormatProfile {
        let (stream_selector, merge_container, post_processor) = match format {
            OutputFormat::Mp4 => (
                "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best",
                Some("mp4".to_string()),
                None,
            ),
            OutputFormat::Mp3 => (
                "bestaudio/best",
                None,
                Some(PostProcessor {
                    key: EXTRACT_AUDIO.to_string(),
                    preferred_codec: "mp3".to_string(),
                    preferred_quality: Some(self.mp3_quality.to_string()),
                }),
            ),
            OutputFormat::Wav => (
                "bestaudio/best",
                None,
                Some(PostProcessor {
                    key: EXTRACT_AUDIO.to_string(),
                    preferred_codec: "wav".to_string(),
                    preferred_quality: None,
                }),
            ),
        };

        FormatProfile {
            format,
            stream_selector: stream_selector.to_string(),
            merge_container,
            post_processor,
            extension: format.extension().to_string(),
            preview: format.preview_kind(),
            mime_type: format.mime_type().to_string(),
        }
    }

    /// Profiles for every recognized format
    pub fn all_profiles(&self) -> Vec<FormatProfile> {
        OutputFormat::ALL.iter().map(|f| self.profile(*f)).collect()
    }

    /// Build the declarative options record for a job
    pub fn engine_options(&self, job: &ExtractionJob, no_playlist: bool) -> EngineOptions {
        let profile = self.profile(job.format);

        EngineOptions {
            output_template: job.output_template(),
            download_ranges: vec![RangeCut {
                start_time: job.range.start_seconds,
                end_time: job.range.end_seconds,
            }],
            force_keyframes_at_cuts: true,
            format: profile.stream_selector,
            merge_output_format: profile.merge_container,
            postprocessors: profile.post_processor.into_iter().collect(),
            no_playlist,
        }
    }
}
