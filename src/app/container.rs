use std::sync::Arc;

use crate::adapters::{AppConfig, LocalFsAdapter, TerminalViewAdapter, YtDlpAdapter};
use crate::app::cut_interactor::CutInteractor;
use crate::app::job_builder::JobRequestBuilder;
use crate::app::presenter::Presenter;
use crate::domain::rules::FormatRules;
use crate::ports::{ExtractionPort, FsPort, ViewPort};

pub trait AppContainer: Send + Sync {
    fn cut_interactor(&self) -> Arc<CutInteractor>;
    fn presenter(&self) -> Presenter;
    fn format_rules(&self) -> FormatRules;
}

pub struct DefaultAppContainer {
    cut_interactor: Arc<CutInteractor>,
    fs_port: Arc<dyn FsPort>,
    view_port: Arc<dyn ViewPort>,
    rules: FormatRules,
}

impl DefaultAppContainer {
    /// Wire the production adapters from configuration
    pub fn new(config: &AppConfig, quiet: bool) -> Self {
        let extraction_port = Arc::new(YtDlpAdapter::new(config.engine_binary.clone()));
        let fs_port = Arc::new(LocalFsAdapter::new());
        let view_port = Arc::new(TerminalViewAdapter::new(quiet));

        Self::with_ports(
            config,
            extraction_port as Arc<dyn ExtractionPort>,
            fs_port as Arc<dyn FsPort>,
            view_port as Arc<dyn ViewPort>,
        )
    }

    /// Wire the given ports
    pub fn with_ports(
        config: &AppConfig,
        extraction_port: Arc<dyn ExtractionPort>,
        fs_port: Arc<dyn FsPort>,
        view_port: Arc<dyn ViewPort>,
    ) -> Self {
        let rules = FormatRules::new(config.mp3_quality);
        let builder = JobRequestBuilder::new(
            rules,
            config.workspace_dir.clone(),
            config.temp_prefix.clone(),
            config.no_playlist,
        );

        let cut_interactor = Arc::new(CutInteractor::new(
            extraction_port,
            Arc::clone(&fs_port),
            builder,
            config.workspace_dir.clone(),
            &config.temp_prefix,
        ));

        Self {
            cut_interactor,
            fs_port,
            view_port,
            rules,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn cut_interactor(&self) -> Arc<CutInteractor> {
        Arc::clone(&self.cut_interactor)
    }

    fn presenter(&self) -> Presenter {
        Presenter::new(Arc::clone(&self.view_port), Arc::clone(&self.fs_port))
    }

    fn format_rules(&self) -> FormatRules {
        self.rules
    }
}
