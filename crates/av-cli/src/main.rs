//! `agentviz` — render per-step agent position frames from MPI snapshot logs.
//!
//! Zero flags by convention: the companion simulators write their snapshots
//! to `mpi_logs/` in the working directory, and this binary reads that same
//! convention. Run it where the simulation ran; stale frames are removed
//! and the full set regenerated.

use std::path::Path;

use anyhow::Result;

use av_core::{StepId, VizConfig};
use av_pipeline::{Pipeline, RunObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Directory the MPI simulators write snapshots into.
const DATA_DIR: &str = "mpi_logs";
/// Rank band width; must match the producers' grid size.
const GRID_SIZE: f64 = 20.0;

// ── Console reporting ─────────────────────────────────────────────────────────

struct Console;

impl RunObserver for Console {
    fn on_cleanup(&mut self, removed: usize) {
        println!("Removed {removed} old frame file(s).");
    }

    fn on_frame_rendered(&mut self, _step: StepId, path: &Path, agents: usize) {
        println!("wrote {} ({agents} agents)", path.display());
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = VizConfig {
        data_dir: DATA_DIR.into(),
        grid_size: GRID_SIZE,
        ..VizConfig::default()
    };

    let report = Pipeline::new(config).run(&mut Console)?;

    println!(
        "{} frame(s) from {} snapshot file(s), {} agents plotted.",
        report.frames.len(),
        report.snapshots_loaded,
        report.agents_plotted
    );
    Ok(())
}
