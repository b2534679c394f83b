//! Rank-band frame layout.
//!
//! Every rank gets a disjoint horizontal band of width `grid_size`; an
//! agent at rank-local `(x, y)` lands on the canvas at
//! `(x + rank * grid_size, y)`. The offset is pure de-overlap placement
//! and says nothing about where ranks sit relative to each other in the
//! simulated world.

use av_core::{AgentRecord, RankId};

/// Canvas geometry for one frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameLayout {
    /// Band width per rank; also the fixed Y extent.
    pub grid_size: f64,
    /// Number of ranks present in this step.
    pub rank_count: usize,
}

impl FrameLayout {
    pub fn new(grid_size: f64, rank_count: usize) -> Self {
        Self { grid_size, rank_count }
    }

    /// Canvas X for a rank-local coordinate.
    #[inline]
    pub fn canvas_x(&self, rank: RankId, x: f64) -> f64 {
        x + rank.0 as f64 * self.grid_size
    }

    /// Canvas position for one record of one rank. Y passes through
    /// unchanged.
    #[inline]
    pub fn place(&self, rank: RankId, record: &AgentRecord) -> (f64, f64) {
        (self.canvas_x(rank, record.x), record.y)
    }

    /// Upper X bound: one band per rank present.
    ///
    /// Bands are indexed by rank *value* while this bound counts rank
    /// *files*, so a gap in rank numbering can push agents past the right
    /// edge. They are clipped by the chart, not an error.
    pub fn x_max(&self) -> f64 {
        self.grid_size * self.rank_count as f64
    }

    /// Upper Y bound, fixed at one band height regardless of the data.
    pub fn y_max(&self) -> f64 {
        self.grid_size
    }
}
