//! Pipeline error types.

use std::path::PathBuf;

use thiserror::Error;

use av_core::StepId;
use av_render::RenderError;
use av_snapshot::SnapshotError;

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Stale-frame cleanup failed. Always fatal: rendering over a
    /// partially cleaned directory would mix old and new frames.
    #[error("cleanup failed in {dir:?}: {source}")]
    Clean {
        dir:    PathBuf,
        source: std::io::Error,
    },

    /// The data directory could not be scanned.
    #[error("could not scan {dir:?}: {source}")]
    Discover {
        dir:    PathBuf,
        source: SnapshotError,
    },

    /// A snapshot file failed parsing or loading under
    /// [`FailurePolicy::FailFast`](crate::FailurePolicy::FailFast).
    #[error("snapshot {path:?}: {source}")]
    Snapshot {
        path:   PathBuf,
        source: SnapshotError,
    },

    /// A frame could not be rendered. Always fatal: a missing frame would
    /// leave a hole in the sequence.
    #[error("could not render frame for step {step}: {source}")]
    Render {
        step:   StepId,
        source: RenderError,
    },

    /// Other I/O failure (creating the output directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type PipelineResult<T> = Result<T, PipelineError>;
