// Domain errors - Error types for the domain layer

use std::fmt;

use serde::Serialize;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Local input rejected before the engine is invoked
    Input(InputError),
    /// Filesystem operation failed
    FsFail(String),
    /// External extraction engine failed
    Engine(EngineFailure),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::Input(err) => write!(f, "{}", err),
            DomainError::FsFail(msg) => write!(f, "Filesystem error: {}", msg),
            DomainError::Engine(failure) => write!(f, "{}", failure),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<InputError> for DomainError {
    fn from(err: InputError) -> Self {
        DomainError::Input(err)
    }
}

impl From<EngineFailure> for DomainError {
    fn from(failure: EngineFailure) -> Self {
        DomainError::Engine(failure)
    }
}

/// Validation failures detected locally, before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputError {
    /// No source URL was given
    EmptyUrl,
    /// The parsed end time is not after the parsed start time
    InvalidRange { start: u64, end: u64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyUrl => write!(f, "Please enter a URL."),
            InputError::InvalidRange { .. } => {
                write!(f, "The end time must be later than the start time.")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Closed set of outcomes an engine failure is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineFailureKind {
    /// The engine does not know how to handle the URL
    UnsupportedSource,
    /// Connection, DNS or HTTP level failure
    Network,
    /// Download finished but muxing or transcoding failed
    Encode,
    /// Anything else, including a missing engine binary
    Unknown,
}

impl EngineFailureKind {
    /// Sort an engine message into a failure kind
    ///
    /// Unavailable, private, age-restricted and region-locked sources are not
    /// distinguished and land in `Unknown`.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("unsupported url") || lower.contains("is not a valid url") {
            return EngineFailureKind::UnsupportedSource;
        }

        const NETWORK_MARKERS: &[&str] = &[
            "unable to download webpage",
            "urlopen error",
            "connection",
            "timed out",
            "name or service not known",
            "temporary failure in name resolution",
            "http error",
            "network is unreachable",
        ];
        if NETWORK_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return EngineFailureKind::Network;
        }

        const ENCODE_MARKERS: &[&str] = &[
            "postprocessing",
            "ffmpeg",
            "ffprobe",
            "conversion failed",
            "error merging",
        ];
        if ENCODE_MARKERS.iter().any(|marker| lower.contains(marker)) {
            return EngineFailureKind::Encode;
        }

        EngineFailureKind::Unknown
    }
}

/// Failure raised by the extraction engine, with its message text kept intact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineFailure {
    pub kind: EngineFailureKind,
    pub message: String,
}

impl EngineFailure {
    /// Build a failure, classifying it from the message
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EngineFailureKind::classify(&message),
            message,
        }
    }

    /// Build a failure of a known kind
    pub fn new(kind: EngineFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An error occurred: {}", self.message)
    }
}

impl std::error::Error for EngineFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unsupported_url() {
        let kind = EngineFailureKind::classify("ERROR: Unsupported URL: https://example.com/x");
        assert_eq!(kind, EngineFailureKind::UnsupportedSource);
    }

    #[test]
    fn test_classify_network() {
        let kind = EngineFailureKind::classify(
            "ERROR: Unable to download webpage: <urlopen error [Errno -2] Name or service not known>",
        );
        assert_eq!(kind, EngineFailureKind::Network);
    }

    #[test]
    fn test_classify_encode() {
        let kind = EngineFailureKind::classify("ERROR: Postprocessing: Conversion failed!");
        assert_eq!(kind, EngineFailureKind::Encode);
    }

    #[test]
    fn test_unavailable_source_is_not_singled_out() {
        let kind = EngineFailureKind::classify("ERROR: [youtube] abc: Video unavailable");
        assert_eq!(kind, EngineFailureKind::Unknown);
    }

    #[test]
    fn test_engine_failure_message_is_interpolated() {
        let failure = EngineFailure::from_message("boom");
        assert_eq!(failure.to_string(), "An error occurred: boom");
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::EmptyUrl.to_string(), "Please enter a URL.");
        assert_eq!(
            InputError::InvalidRange { start: 10, end: 5 }.to_string(),
            "The end time must be later than the start time."
        );
    }
}
