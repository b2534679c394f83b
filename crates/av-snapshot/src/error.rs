//! Snapshot error types.

use thiserror::Error;

/// Errors produced while discovering or loading snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file has the `step_*_rank_*.csv` glob shape but its step or rank
    /// segment is not a `u32`.
    #[error("filename {0:?} does not match step_<N>_rank_<M>.csv")]
    Filename(String),

    /// The CSV table is malformed: a required column is missing, or a field
    /// failed to parse as the expected type.
    #[error("snapshot parse error: {0}")]
    Parse(String),

    /// I/O error reading the data directory or a snapshot file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
