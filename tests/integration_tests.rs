use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use ytcut_cli::adapters::{AppConfig, LocalFsAdapter};
use ytcut_cli::app::container::{AppContainer, DefaultAppContainer};
use ytcut_cli::app::{RunOutcome, RunState, WorkspaceCleaner};
use ytcut_cli::domain::model::*;
use ytcut_cli::ports::*;
use ytcut_cli::*;

/// Test doubles for the ports
mod test_utils {
    use super::*;

    /// What the spy engine does when called
    #[derive(Clone)]
    pub enum EngineBehavior {
        /// Write the file the job expects
        WriteOutput,
        /// Return without writing anything
        Silent,
        /// Raise with the given message
        Raise(String),
    }

    /// Engine double that records every call
    pub struct SpyEngine {
        behavior: EngineBehavior,
        pub calls: Mutex<Vec<(ExtractionJob, EngineOptions)>>,
    }

    impl SpyEngine {
        pub fn new(behavior: EngineBehavior) -> Self {
            Self {
                behavior,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ExtractionPort for SpyEngine {
        async fn execute(
            &self,
            job: &ExtractionJob,
            options: &EngineOptions,
        ) -> Result<(), EngineFailure> {
            self.calls
                .lock()
                .unwrap()
                .push((job.clone(), options.clone()));

            match &self.behavior {
                EngineBehavior::WriteOutput => {
                    fs::write(job.expected_path(), b"fake media bytes").unwrap();
                    Ok(())
                }
                EngineBehavior::Silent => Ok(()),
                EngineBehavior::Raise(message) => Err(EngineFailure::from_message(message.clone())),
            }
        }
    }

    /// Local filesystem that can refuse one removal and logs every call
    pub struct FlakyFs {
        inner: LocalFsAdapter,
        refuse_removal_of: Option<String>,
        pub ops: Mutex<Vec<String>>,
    }

    impl FlakyFs {
        pub fn new(refuse_removal_of: Option<&str>) -> Self {
            Self {
                inner: LocalFsAdapter::new(),
                refuse_removal_of: refuse_removal_of.map(str::to_string),
                ops: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, op: &str) {
            self.ops.lock().unwrap().push(op.to_string());
        }

        pub fn recorded(&self, op: &str) -> bool {
            self.ops.lock().unwrap().iter().any(|o| o == op)
        }
    }

    #[async_trait]
    impl FsPort for FlakyFs {
        async fn list_entries(&self, dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
            self.record("list_entries");
            self.inner.list_entries(dir).await
        }

        async fn remove_file(&self, file_path: &Path) -> Result<(), DomainError> {
            self.record("remove_file");
            let name = file_path.file_name().and_then(|n| n.to_str());
            if name.is_some() && name == self.refuse_removal_of.as_deref() {
                return Err(DomainError::FsFail("permission denied".to_string()));
            }
            self.inner.remove_file(file_path).await
        }

        async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
            self.record("file_exists");
            self.inner.file_exists(file_path).await
        }

        async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError> {
            self.record("file_size");
            self.inner.file_size(file_path).await
        }

        async fn stream_copy(&self, from: &Path, to: &Path) -> Result<u64, DomainError> {
            self.record("stream_copy");
            self.inner.stream_copy(from, to).await
        }
    }

    /// View double that records what was rendered
    #[derive(Default)]
    pub struct RecordingView {
        pub events: Mutex<Vec<String>>,
    }

    impl RecordingView {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ViewPort for RecordingView {
        async fn show_busy(&self, _message: &str) {
            self.events.lock().unwrap().push("busy".to_string());
        }

        async fn show_success(&self, _message: &str, preview: &Preview, offer: &DownloadOffer) {
            self.events
                .lock()
                .unwrap()
                .push(format!("success:{}:{}", preview.kind, offer.file_name));
        }

        async fn show_error(&self, message: &str) {
            self.events.lock().unwrap().push(format!("error:{}", message));
        }
    }

    /// Everything one scenario needs
    pub struct Harness {
        pub workspace: TempDir,
        pub engine: Arc<SpyEngine>,
        pub fs: Arc<FlakyFs>,
        pub view: Arc<RecordingView>,
        pub container: DefaultAppContainer,
    }

    impl Harness {
        pub fn new(behavior: EngineBehavior) -> Self {
            let workspace = TempDir::new().unwrap();
            let config = AppConfig {
                workspace_dir: workspace.path().to_path_buf(),
                ..AppConfig::default()
            };
            let engine = Arc::new(SpyEngine::new(behavior));
            let fs = Arc::new(FlakyFs::new(None));
            let view = Arc::new(RecordingView::default());

            let container = DefaultAppContainer::with_ports(
                &config,
                Arc::clone(&engine) as Arc<dyn ExtractionPort>,
                Arc::clone(&fs) as Arc<dyn FsPort>,
                Arc::clone(&view) as Arc<dyn ViewPort>,
            );

            Self {
                workspace,
                engine,
                fs,
                view,
                container,
            }
        }

        pub async fn run(&self, request: CutRequest) -> (RunState, Presenter) {
            let mut presenter = self.container.presenter();
            let state = self
                .container
                .cut_interactor()
                .execute(request, &mut presenter)
                .await;
            (state, presenter)
        }
    }
}

use test_utils::*;

#[tokio::test]
async fn test_end_to_end_mp4_success() {
    let harness = Harness::new(EngineBehavior::WriteOutput);
    let request = CutRequest::new("https://example/video", OutputFormat::Mp4, "00:00", "00:10");

    let (state, presenter) = harness.run(request).await;

    assert_eq!(state, RunState::Success);
    assert_eq!(presenter.state(), RunState::Success);
    assert_eq!(harness.engine.call_count(), 1);

    let calls = harness.engine.calls.lock().unwrap();
    let (job, options) = &calls[0];
    assert_eq!(job.source_url, "https://example/video");
    assert_eq!(
        options.download_ranges,
        vec![RangeCut {
            start_time: 0,
            end_time: 10
        }]
    );
    assert!(options.force_keyframes_at_cuts);
    assert!(job.output_name_base.as_str().starts_with("temp_"));

    match presenter.outcome() {
        Some(RunOutcome::Success {
            preview, download, ..
        }) => {
            assert_eq!(preview.kind, PreviewKind::VideoPlayer);
            assert_eq!(preview.path, job.expected_path());
            assert_eq!(download.file_name, "cut_video.mp4");
            assert_eq!(download.mime_type, "video/mp4");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(
        harness.view.events(),
        vec!["busy".to_string(), "success:video player:cut_video.mp4".to_string()]
    );
}

#[tokio::test]
async fn test_save_streams_file_under_fixed_name() {
    let harness = Harness::new(EngineBehavior::WriteOutput);
    let request = CutRequest::new("https://example/video", OutputFormat::Wav, "1", "2");
    let (_, presenter) = harness.run(request).await;

    let downloads = TempDir::new().unwrap();
    let saved = presenter.save(downloads.path()).await.unwrap();

    assert_eq!(saved, downloads.path().join("cut_video.wav"));
    assert_eq!(fs::read(&saved).unwrap(), b"fake media bytes");
}

#[tokio::test]
async fn test_audio_formats_map_to_extension_and_mime() {
    for (format, ext, mime) in [
        (OutputFormat::Mp3, "mp3", "audio/mp3"),
        (OutputFormat::Wav, "wav", "audio/wav"),
    ] {
        let harness = Harness::new(EngineBehavior::WriteOutput);
        let request = CutRequest::new("https://example/video", format, "00:00", "00:10");
        let (state, presenter) = harness.run(request).await;

        assert_eq!(state, RunState::Success);
        match presenter.outcome() {
            Some(RunOutcome::Success {
                preview, download, ..
            }) => {
                assert_eq!(preview.kind, PreviewKind::AudioPlayer);
                assert_eq!(preview.path.extension().unwrap(), ext);
                assert_eq!(download.file_name, format!("cut_video.{}", ext));
                assert_eq!(download.mime_type, mime);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_invalid_range_never_reaches_engine() {
    for (start, end) in [("00:10", "00:05"), ("00:10", "00:10"), ("00:00", "bogus")] {
        let harness = Harness::new(EngineBehavior::WriteOutput);
        let request = CutRequest::new("https://example/video", OutputFormat::Mp4, start, end);

        let (state, presenter) = harness.run(request).await;

        assert_eq!(state, RunState::InputError);
        assert_eq!(harness.engine.call_count(), 0);
        assert!(matches!(
            presenter.outcome(),
            Some(RunOutcome::InputError {
                error: InputError::InvalidRange { .. },
                ..
            })
        ));
        assert!(!harness.view.events().contains(&"busy".to_string()));
    }
}

#[tokio::test]
async fn test_empty_url_rejected_before_cleanup() {
    let harness = Harness::new(EngineBehavior::WriteOutput);
    let stale = harness.workspace.path().join("temp_1.mp4");
    fs::write(&stale, b"old").unwrap();

    let request = CutRequest::new("", OutputFormat::Mp4, "00:00", "00:10");
    let (state, _) = harness.run(request).await;

    assert_eq!(state, RunState::InputError);
    assert_eq!(harness.engine.call_count(), 0);
    assert!(stale.exists());
    assert_eq!(
        harness.view.events(),
        vec!["error:Please enter a URL.".to_string()]
    );
}

#[tokio::test]
async fn test_missing_output_is_generation_failure() {
    let harness = Harness::new(EngineBehavior::Silent);
    let request = CutRequest::new("https://example/video", OutputFormat::Mp4, "00:00", "00:10");

    let (state, presenter) = harness.run(request).await;

    assert_eq!(state, RunState::GenerationFailed);
    assert_eq!(harness.engine.call_count(), 1);
    assert!(matches!(
        presenter.outcome(),
        Some(RunOutcome::GenerationFailed { .. })
    ));
    assert!(presenter.save(harness.workspace.path()).await.is_err());
}

#[tokio::test]
async fn test_engine_error_carries_message_and_skips_file_operations() {
    let harness = Harness::new(EngineBehavior::Raise(
        "ERROR: Unsupported URL: https://example/video".to_string(),
    ));
    let request = CutRequest::new("https://example/video", OutputFormat::Mp4, "00:00", "00:10");

    let (state, presenter) = harness.run(request).await;

    assert_eq!(state, RunState::EngineError);
    match presenter.outcome() {
        Some(RunOutcome::EngineError { message, failure }) => {
            assert_eq!(failure.message, "ERROR: Unsupported URL: https://example/video");
            assert_eq!(failure.kind, EngineFailureKind::UnsupportedSource);
            assert!(message.contains("Unsupported URL"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert!(!harness.fs.recorded("file_exists"));
    assert!(!harness.fs.recorded("stream_copy"));
    assert!(presenter.save(harness.workspace.path()).await.is_err());
    assert!(!harness.fs.recorded("stream_copy"));

    let events = harness.view.events();
    assert_eq!(events.len(), 2);
    assert!(events[1].starts_with("error:An error occurred: ERROR: Unsupported URL"));
}

#[tokio::test]
async fn test_run_cleans_stale_outputs_first() {
    let harness = Harness::new(EngineBehavior::WriteOutput);
    let stale = harness.workspace.path().join("temp_1.mp3");
    fs::write(&stale, b"old").unwrap();

    let request = CutRequest::new("https://example/video", OutputFormat::Mp4, "00:00", "00:10");
    let (state, _) = harness.run(request).await;

    assert_eq!(state, RunState::Success);
    assert!(!stale.exists());
}

fn seed_workspace(dir: &Path) {
    for name in ["temp_1.mp4", "temp_2.wav", "other.mp4", "notes.txt"] {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

#[tokio::test]
async fn test_cleaner_removes_only_temp_media() {
    let dir = TempDir::new().unwrap();
    seed_workspace(dir.path());

    let cleaner = WorkspaceCleaner::new(Arc::new(FlakyFs::new(None)), "temp_");
    let report = cleaner.clean(dir.path()).await;

    assert_eq!(report.removed.len(), 2);
    assert!(report.failed.is_empty());
    assert!(!dir.path().join("temp_1.mp4").exists());
    assert!(!dir.path().join("temp_2.wav").exists());
    assert!(dir.path().join("other.mp4").exists());
    assert!(dir.path().join("notes.txt").exists());
}

#[tokio::test]
async fn test_cleaner_swallows_removal_failure() {
    let dir = TempDir::new().unwrap();
    seed_workspace(dir.path());

    let cleaner = WorkspaceCleaner::new(Arc::new(FlakyFs::new(Some("temp_2.wav"))), "temp_");
    let report = cleaner.clean(dir.path()).await;

    assert_eq!(report.removed, vec![dir.path().join("temp_1.mp4")]);
    assert_eq!(report.failed, vec![dir.path().join("temp_2.wav")]);
    assert!(!dir.path().join("temp_1.mp4").exists());
    assert!(dir.path().join("temp_2.wav").exists());
    assert!(dir.path().join("other.mp4").exists());
    assert!(dir.path().join("notes.txt").exists());
}

#[tokio::test]
async fn test_next_run_resets_to_running() {
    let harness = Harness::new(EngineBehavior::Silent);
    let mut presenter = harness.container.presenter();
    assert_eq!(presenter.state(), RunState::Idle);

    let interactor = harness.container.cut_interactor();
    let bad = CutRequest::new("", OutputFormat::Mp4, "00:00", "00:10");
    assert_eq!(
        interactor.execute(bad, &mut presenter).await,
        RunState::InputError
    );

    let good = CutRequest::new("https://example/video", OutputFormat::Mp4, "00:00", "00:10");
    assert_eq!(
        interactor.execute(good, &mut presenter).await,
        RunState::GenerationFailed
    );
    assert_eq!(
        harness.view.events(),
        vec![
            "error:Please enter a URL.".to_string(),
            "busy".to_string(),
            "error:Failed to generate the file.".to_string(),
        ]
    );
}
