//! Caller-side state for building grid sheets interactively.
//!
//! The `pdf-grid` library is stateless. This crate owns everything that
//! lives between generation calls: the pending files, the processing
//! status and the last generated artifact.

mod session;
mod worker;

pub use session::{Artifact, FileId, GridFile, GridSession, ProcessingStatus};
pub use worker::{GridCommand, GridUpdate, worker_task};

// Re-export types from the library crate
pub use pdf_grid::{GeneratedGrid, GridError, GridStatistics, SheetConfig, SourceItem};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Maximum {} files allowed; remove some files to add new ones", pdf_grid::MAX_ITEMS)]
    Full,
    #[error("No files to combine")]
    NoFiles,
    #[error("Failed to generate grid: {0}")]
    Generation(#[from] GridError),
}
