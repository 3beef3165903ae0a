//! Time parsing and formatting utilities

use tracing::debug;

/// Time parser for the lenient `MM:SS` / `HH:MM:SS` / seconds formats
///
/// Parsing never fails. Input that cannot be read as a timestamp becomes `0`,
/// the start of the video. Callers rely on this: a malformed start time cuts
/// from the beginning, and a malformed end time is then caught by the range
/// check because it cannot be later than any start.
#[derive(Debug, Clone, Copy)]
pub struct TimeParser;

impl TimeParser {
    /// Create a new time parser
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeParser {
    /// Parse time string to whole seconds, falling back to `0`
    pub fn parse_time(&self, time_str: &str) -> u64 {
        match Self::try_parse(time_str) {
            Some(seconds) => seconds,
            None => {
                debug!(input = %time_str, "Unreadable time, using 0");
                0
            }
        }
    }

    /// Strict variant used by `parse_time`
    fn try_parse(time_str: &str) -> Option<u64> {
        let parts = time_str
            .split(':')
            .map(Self::parse_component)
            .collect::<Option<Vec<u64>>>()?;

        match parts.as_slice() {
            [minutes, seconds] => minutes.checked_mul(60)?.checked_add(*seconds),
            [hours, minutes, seconds] => hours
                .checked_mul(3600)?
                .checked_add(minutes.checked_mul(60)?)?
                .checked_add(*seconds),
            [seconds] => Some(*seconds),
            _ => None,
        }
    }

    /// Parse one colon-delimited token
    fn parse_component(token: &str) -> Option<u64> {
        token.trim().parse::<u64>().ok()
    }

    /// Format seconds as `MM:SS`, or `HH:MM:SS` past the hour
    pub fn format_time(&self, seconds: u64) -> String {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes, secs)
        } else {
            format!("{:02}:{:02}", minutes, secs)
        }
    }
}

/// Parse a timestamp with the default parser
pub fn parse_time(time_str: &str) -> u64 {
    TimeParser::new().parse_time(time_str)
}
