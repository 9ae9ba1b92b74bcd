//! Errors surfaced by pipeline orchestration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] rank_core::CoreError),

    #[error(transparent)]
    Io(#[from] rank_io::IoError),
}
