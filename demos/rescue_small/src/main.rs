//! rescue_small — smallest end-to-end demo of the agentviz pipeline.
//!
//! Stands in for the MPI simulators during development: writes a few
//! steps × ranks of snapshot CSVs (same columns the real producers emit,
//! including the leading `id` the renderer ignores), then runs the full
//! pipeline over them. Everything lands under `output/rescue_small/`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use av_core::VizConfig;
use av_pipeline::{FailurePolicy, NoopObserver, Pipeline};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const STEPS:           u32   = 6;
const RANKS:           u32   = 3;
const AGENTS_PER_RANK: usize = 40;
/// Zone side length; the frames use the same value so bands line up.
const GRID_SIZE:       f64   = 20.0;
/// Fraction of agents flagged as rescuers (the producers use 1 in 4).
const RESCUER_SHARE:   f64   = 0.25;

// ── Fixture generation ────────────────────────────────────────────────────────

/// Write one snapshot CSV the way the MPI producers do: leading `id`
/// column, integer coordinates, 0/1 booleans. Returns how many of its
/// agents are alive.
fn write_snapshot(dir: &Path, step: u32, rank: u32, rng: &mut SmallRng) -> Result<usize> {
    let path = dir.join(format!("step_{step}_rank_{rank}.csv"));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["id", "x", "y", "is_rescue", "is_alive"])?;

    let grid = GRID_SIZE as u32;
    let mut alive_count = 0;
    for id in 0..AGENTS_PER_RANK {
        let x = rng.gen_range(0..grid);
        let y = rng.gen_range(0..grid);
        let is_rescue = rng.gen_bool(RESCUER_SHARE);
        // A disaster front sweeps along the zone's middle row, one column
        // per step; agents caught on it are casualties.
        let is_alive = !(y == grid / 2 && x <= step);
        if is_alive {
            alive_count += 1;
        }

        writer.write_record(&[
            id.to_string(),
            x.to_string(),
            y.to_string(),
            u8::from(is_rescue).to_string(),
            u8::from(is_alive).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(alive_count)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== rescue_small — agentviz demo ===");
    println!("Steps: {STEPS}  |  Ranks: {RANKS}  |  Agents/rank: {AGENTS_PER_RANK}  |  Seed: {SEED}");
    println!();

    let base = PathBuf::from("output/rescue_small");
    let data_dir = base.join("mpi_logs");
    fs::create_dir_all(&data_dir)?;

    // 1. Synthesize snapshot files.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut alive_total = 0;
    for step in 0..STEPS {
        for rank in 0..RANKS {
            alive_total += write_snapshot(&data_dir, step, rank, &mut rng)?;
        }
    }
    println!(
        "Wrote {} snapshot files to {} ({alive_total} live agents total)",
        STEPS * RANKS,
        data_dir.display()
    );

    // 2. Render every step.
    let config = VizConfig {
        data_dir,
        output_dir:      base.join("frames"),
        grid_size:       GRID_SIZE,
        frame_width_px:  600,
        frame_height_px: 600,
    };
    let t0 = Instant::now();
    let report = Pipeline::new(config)
        .failure_policy(FailurePolicy::SkipAndReport)
        .run(&mut NoopObserver)?;
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!(
        "Rendered {} frame(s) from {} snapshot(s) in {:.3} s",
        report.frames.len(),
        report.snapshots_loaded,
        elapsed.as_secs_f64()
    );
    if !report.is_clean() {
        println!("({} input file(s) skipped)", report.skipped.len());
    }
    println!();
    println!("{:<8} {:<24} {:<8}", "Step", "Frame", "Agents");
    println!("{}", "-".repeat(42));
    for frame in &report.frames {
        let name = frame.path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
        println!("{:<8} {:<24} {:<8}", frame.step, name, frame.agents);
    }

    Ok(())
}
