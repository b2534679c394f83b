//! `av-pipeline` — run orchestration for agentviz.
//!
//! A run is: delete stale frames, scan the data directory, load every
//! snapshot into the step index, render one frame per step in ascending
//! step order. [`Pipeline`] drives those stages, reporting progress
//! through a [`RunObserver`] and returning a [`RunReport`].
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`run`]      | [`Pipeline`], [`FailurePolicy`]                |
//! | [`clean`]    | [`clean_frames`] stale-frame removal           |
//! | [`observer`] | [`RunObserver`], [`NoopObserver`]              |
//! | [`report`]   | [`RunReport`], [`RenderedFrame`]               |
//! | [`error`]    | [`PipelineError`], [`PipelineResult`]          |

pub mod clean;
pub mod error;
pub mod observer;
pub mod report;
pub mod run;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clean::clean_frames;
pub use error::{PipelineError, PipelineResult};
pub use observer::{NoopObserver, RunObserver};
pub use report::{RenderedFrame, RunReport};
pub use run::{FailurePolicy, Pipeline};
