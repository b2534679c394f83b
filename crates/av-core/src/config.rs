//! Run configuration.
//!
//! Every knob the pipeline has lives here as an explicit value that the
//! application constructs and passes down; there is no module-level state.
//! `Default` reproduces the fixed constants of the zero-configuration run:
//! snapshots read from `mpi_logs/`, frames written next to the binary,
//! 20-unit rank bands, 1000×1000 px output.

use std::path::PathBuf;

/// Pipeline configuration shared by discovery, rendering, and cleanup.
#[derive(Clone, Debug)]
pub struct VizConfig {
    /// Directory scanned for `step_<N>_rank_<M>.csv` snapshot files.
    pub data_dir: PathBuf,

    /// Directory frames are written to (and stale frames cleaned from).
    pub output_dir: PathBuf,

    /// Width of one rank's horizontal band, and the fixed Y extent of every
    /// frame. Rank `r`'s agents are offset by `r * grid_size` on X.
    pub grid_size: f64,

    /// Output bitmap width in pixels.
    pub frame_width_px: u32,

    /// Output bitmap height in pixels.
    pub frame_height_px: u32,
}

impl VizConfig {
    /// Bitmap dimensions as the `(width, height)` tuple the plotting
    /// backend expects.
    pub fn frame_dimensions(&self) -> (u32, u32) {
        (self.frame_width_px, self.frame_height_px)
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            data_dir:        PathBuf::from("mpi_logs"),
            output_dir:      PathBuf::from("."),
            grid_size:       20.0,
            frame_width_px:  1000,
            frame_height_px: 1000,
        }
    }
}
