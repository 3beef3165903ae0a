// Cut interactor - Orchestrates one cut-and-preview run

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use crate::app::cleaner::WorkspaceCleaner;
use crate::app::job_builder::{CutRequest, JobRequestBuilder};
use crate::app::locator::ResultLocator;
use crate::app::presenter::{Presenter, RunState};
use crate::ports::*;

/// Interactor for the cut use case
///
/// Steps run strictly in order: URL check, workspace cleanup, range check,
/// engine run, output lookup, presentation. Local validation failures end
/// the run before the engine is touched.
pub struct CutInteractor {
    extraction_port: Arc<dyn ExtractionPort>,
    builder: JobRequestBuilder,
    cleaner: WorkspaceCleaner,
    locator: ResultLocator,
    workspace: PathBuf,
}

impl CutInteractor {
    /// Create new cut interactor with injected ports
    pub fn new(
        extraction_port: Arc<dyn ExtractionPort>,
        fs_port: Arc<dyn FsPort>,
        builder: JobRequestBuilder,
        workspace: impl Into<PathBuf>,
        temp_prefix: &str,
    ) -> Self {
        Self {
            extraction_port,
            builder,
            cleaner: WorkspaceCleaner::new(Arc::clone(&fs_port), temp_prefix),
            locator: ResultLocator::new(fs_port),
            workspace: workspace.into(),
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn cleaner(&self) -> &WorkspaceCleaner {
        &self.cleaner
    }

    /// Execute one run, leaving the presenter in a terminal state
    pub async fn execute(&self, request: CutRequest, presenter: &mut Presenter) -> RunState {
        let span = info_span!("cut", url = %request.url, format = %request.format);
        self.run(request, presenter).instrument(span).await
    }

    async fn run(&self, request: CutRequest, presenter: &mut Presenter) -> RunState {
        let url = match self.builder.validate_url(&request.url) {
            Ok(url) => url.to_string(),
            Err(e) => {
                presenter.reject_input(e).await;
                return presenter.state();
            }
        };

        self.cleaner.clean(&self.workspace).await;

        let range = match self
            .builder
            .parse_range(&request.start_time, &request.end_time)
        {
            Ok(range) => range,
            Err(e) => {
                presenter.reject_input(e).await;
                return presenter.state();
            }
        };

        let job = self.builder.build_job(&url, request.format, range);
        let options = self.builder.engine_options(&job);
        info!(name = %job.output_name_base, range = %job.range, "Submitting extraction job");

        presenter.begin().await;

        if let Err(failure) = self.extraction_port.execute(&job, &options).await {
            presenter.fail_engine(failure).await;
            return presenter.state();
        }

        match self.locator.locate(&job).await {
            Some(result) => presenter.succeed(&result).await,
            None => presenter.fail_generation(job.expected_path()).await,
        }

        presenter.state()
    }
}
