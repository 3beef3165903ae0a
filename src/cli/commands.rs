//! Command implementations

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info};

use crate::adapters::AppConfig;
use crate::app::container::AppContainer;
use crate::app::{CleanupReport, CutRequest, RunOutcome, RunState};
use crate::cli::args::{CleanArgs, CutArgs, FormatsArgs};
use crate::domain::model::{OutputFormat, PreviewKind};
use crate::domain::rules::FormatProfile;
use crate::error::CutterResult;

/// Exit code for local input errors
const EXIT_INPUT_ERROR: u8 = 2;

/// JSON document printed by `cut --json`
#[derive(Debug, Serialize)]
struct CutReport<'a> {
    outcome: Option<&'a RunOutcome>,
    saved_to: Option<PathBuf>,
    save_error: Option<String>,
}

/// Map a terminal run state to the process exit code
pub fn exit_code_for(state: RunState) -> ExitCode {
    match state {
        RunState::Success => ExitCode::SUCCESS,
        RunState::InputError => ExitCode::from(EXIT_INPUT_ERROR),
        _ => ExitCode::FAILURE,
    }
}

/// Execute the cut command
pub async fn cut(
    container: &dyn AppContainer,
    config: &AppConfig,
    args: CutArgs,
) -> CutterResult<ExitCode> {
    let format = OutputFormat::parse(&args.format)?;
    let request = CutRequest::new(
        args.url,
        format,
        args.start.unwrap_or_else(|| config.default_start.clone()),
        args.end.unwrap_or_else(|| config.default_end.clone()),
    );

    let interactor = container.cut_interactor();
    let mut presenter = container.presenter();
    let state = interactor.execute(request, &mut presenter).await;

    let mut saved_to = None;
    let mut save_error = None;
    if state == RunState::Success {
        if let Some(dir) = &args.save_to {
            match presenter.save(dir).await {
                Ok(path) => {
                    if !args.json {
                        println!("Saved {}", path.display());
                    }
                    saved_to = Some(path);
                }
                // The JSON report still goes out, carrying the failure
                Err(e) if args.json => {
                    error!(error = %e, "Saving the result failed");
                    save_error = Some(e.to_string());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    if args.json {
        let report = CutReport {
            outcome: presenter.outcome(),
            saved_to,
            save_error: save_error.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!(state = ?state, "Cut command finished");
    if save_error.is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(exit_code_for(state))
}

/// Execute the clean command
pub async fn clean(
    container: &dyn AppContainer,
    args: CleanArgs,
) -> CutterResult<ExitCode> {
    let interactor = container.cut_interactor();
    let report = interactor.cleaner().clean(interactor.workspace()).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_cleanup_report(&report);
    }

    Ok(ExitCode::SUCCESS)
}

/// Execute the formats command
pub fn formats(container: &dyn AppContainer, args: FormatsArgs) -> CutterResult<ExitCode> {
    let profiles = container.format_rules().all_profiles();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        display_profiles(&profiles);
    }

    Ok(ExitCode::SUCCESS)
}

/// Display cleanup report in human-readable format
fn display_cleanup_report(report: &CleanupReport) {
    println!("Removed {} stale file(s)", report.removed.len());
    for path in &report.removed {
        println!("  - {}", path.display());
    }
    if !report.failed.is_empty() {
        println!("Could not remove {} file(s)", report.failed.len());
        for path in &report.failed {
            println!("  ! {}", path.display());
        }
    }
}

/// Display format profiles as a table
fn display_profiles(profiles: &[FormatProfile]) {
    println!(
        "{:<7} {:<58} {:<34} {:<10} {}",
        "FORMAT", "STREAMS", "POST-PROCESSING", "PREVIEW", "MIME"
    );
    for profile in profiles {
        println!(
            "{:<7} {:<58} {:<34} {:<10} {}",
            profile.extension,
            profile.stream_selector,
            profile.post_processing_summary(),
            match profile.preview {
                PreviewKind::VideoPlayer => "video",
                PreviewKind::AudioPlayer => "audio",
            },
            profile.mime_type
        );
    }
}
