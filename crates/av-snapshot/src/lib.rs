//! `av-snapshot` — snapshot discovery and loading for agentviz.
//!
//! The MPI simulators write one CSV per (step, rank) pair, named
//! `step_<N>_rank_<M>.csv`. This crate finds those files, parses their
//! names and contents, and groups the results into a per-step index the
//! renderer consumes.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`discover`] | filename pattern, directory scan, [`Discovery`] |
//! | [`loader`]   | CSV table → `Vec<AgentRecord>`                  |
//! | [`index`]    | [`StepIndex`] grouping records by step          |
//! | [`error`]    | [`SnapshotError`], [`SnapshotResult`]           |

pub mod discover;
pub mod error;
pub mod index;
pub mod loader;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use discover::{
    discover, parse_filename, Discovery, RejectedFile, SnapshotFile, SnapshotId,
};
pub use error::{SnapshotError, SnapshotResult};
pub use index::StepIndex;
pub use loader::{load_records, read_records, REQUIRED_COLUMNS};
