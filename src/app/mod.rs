// Application layer - Use case interactors

pub mod cleaner;
pub mod container;
pub mod cut_interactor;
pub mod job_builder;
pub mod locator;
pub mod presenter;

// Re-export interactors
pub use cleaner::{CleanupReport, WorkspaceCleaner};
pub use cut_interactor::CutInteractor;
pub use job_builder::{CutRequest, JobRequestBuilder};
pub use locator::ResultLocator;
pub use presenter::{Presenter, RunOutcome, RunState};
