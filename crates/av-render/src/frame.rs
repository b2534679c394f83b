//! Frame naming and rendering.
//!
//! One call renders one step: every rank's records scattered on a shared
//! canvas, rank bands side by side, written as `frame_step_<N>.png` in the
//! configured output directory (overwriting any previous frame for the
//! step).

use std::path::PathBuf;

use plotters::prelude::*;

use av_core::{AgentRecord, RankId, StepId, VizConfig};

use crate::layout::FrameLayout;
use crate::palette::AgentClass;
use crate::RenderResult;

/// Frame filename prefix; the stale-frame cleaner keys off this too.
pub const FRAME_PREFIX: &str = "frame_step_";
/// Frame filename extension.
pub const FRAME_SUFFIX: &str = ".png";

/// Marker opacity. Agents overlap heavily in dense steps.
const POINT_ALPHA: f64 = 0.6;
/// Marker radius in pixels.
const POINT_RADIUS: i32 = 4;

/// The output filename for a step's frame.
pub fn frame_filename(step: StepId) -> String {
    format!("{FRAME_PREFIX}{step}{FRAME_SUFFIX}")
}

/// `true` if `name` matches the `frame_step_*.png` glob.
pub fn is_frame_filename(name: &str) -> bool {
    name.len() >= FRAME_PREFIX.len() + FRAME_SUFFIX.len()
        && name.starts_with(FRAME_PREFIX)
        && name.ends_with(FRAME_SUFFIX)
}

/// Render one step's frame and return the path written.
///
/// The canvas spans `[0, grid_size * ranks.len()]` on X and
/// `[0, grid_size]` on Y whatever the data says; stray points are clipped
/// by the chart rather than stretching the axes.
pub fn render_frame(
    config: &VizConfig,
    step:   StepId,
    ranks:  &[(RankId, Vec<AgentRecord>)],
) -> RenderResult<PathBuf> {
    let path = config.output_dir.join(frame_filename(step));
    let layout = FrameLayout::new(config.grid_size, ranks.len());

    // Scoped so the backend's borrow of `path` ends before it is returned.
    {
        let root = BitMapBackend::new(&path, config.frame_dimensions()).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Agent Positions at Step {step}"), ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..layout.x_max(), 0.0..layout.y_max())?;

        chart
            .configure_mesh()
            .x_desc("Zone X")
            .y_desc("Y Position")
            .draw()?;

        for (rank, records) in ranks {
            chart.draw_series(records.iter().map(|record| {
                let style = AgentClass::of(record).color().mix(POINT_ALPHA).filled();
                Circle::new(layout.place(*rank, record), POINT_RADIUS, style)
            }))?;
        }

        root.present()?;
    }
    Ok(path)
}
