//! The run report.

use std::path::PathBuf;

use av_core::StepId;
use av_snapshot::RejectedFile;

/// One written frame.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    pub step:   StepId,
    pub path:   PathBuf,
    /// Agent records plotted into this frame, summed over its ranks.
    pub agents: usize,
}

/// What one pipeline run did: counts for the happy path, typed failures
/// for everything skipped. Returned by
/// [`Pipeline::run`](crate::Pipeline::run).
#[derive(Debug, Default)]
pub struct RunReport {
    /// Stale frames deleted before rendering.
    pub stale_frames_removed: usize,
    /// Snapshot files parsed, loaded, and indexed.
    pub snapshots_loaded: usize,
    /// Files rejected or unreadable, with the error each produced. Always
    /// empty under [`FailurePolicy::FailFast`](crate::FailurePolicy::FailFast).
    pub skipped: Vec<RejectedFile>,
    /// Frames written, in render (ascending step) order.
    pub frames: Vec<RenderedFrame>,
    /// Total agent records plotted across all frames.
    pub agents_plotted: usize,
}

impl RunReport {
    /// `true` if no input file was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
