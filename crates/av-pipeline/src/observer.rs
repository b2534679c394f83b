//! Run observer trait for progress reporting.

use std::path::Path;

use av_core::StepId;
use av_snapshot::{SnapshotError, SnapshotFile};

use crate::RunReport;

/// Callbacks invoked by [`Pipeline::run`](crate::Pipeline::run) at key
/// points in a run.
///
/// All methods have default no-op implementations, so implementors only
/// override what they care about.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Console;
///
/// impl RunObserver for Console {
///     fn on_frame_rendered(&mut self, _step: StepId, path: &Path, agents: usize) {
///         println!("wrote {} ({agents} agents)", path.display());
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called once after stale-frame cleanup, with the number removed.
    fn on_cleanup(&mut self, _removed: usize) {}

    /// Called after each snapshot file parses and loads cleanly.
    fn on_snapshot_loaded(&mut self, _file: &SnapshotFile, _agents: usize) {}

    /// Called when a file is skipped under
    /// [`FailurePolicy::SkipAndReport`](crate::FailurePolicy::SkipAndReport).
    fn on_snapshot_skipped(&mut self, _path: &Path, _error: &SnapshotError) {}

    /// Called after each frame is written.
    fn on_frame_rendered(&mut self, _step: StepId, _path: &Path, _agents: usize) {}

    /// Called once after the run completes. Not called on abort.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`RunObserver`] that does nothing. Use when you need to call
/// [`Pipeline::run`](crate::Pipeline::run) but don't want progress
/// callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
