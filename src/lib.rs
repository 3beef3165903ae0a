//! ytcut Library
//!
//! Cuts a time range out of an online video through an external
//! download/transcode engine and hands back an mp4, mp3 or wav file with a
//! preview description and a save action.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! types and format rules, [`ports`] the seams to the outside world,
//! [`adapters`] the yt-dlp, filesystem, terminal and TOML implementations,
//! and [`app`] the run pipeline that ties them together.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{CutInteractor, CutRequest, Presenter, RunOutcome, RunState};
pub use domain::errors::{DomainError, EngineFailure, EngineFailureKind, InputError};
pub use domain::model::{ExtractionJob, OutputFormat, TimeRange};
pub use error::{CutterError, CutterResult};
pub use utils::time::parse_time;
