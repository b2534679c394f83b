//! `av-core` — foundational types for the `agentviz` snapshot renderer.
//!
//! Every other `av-*` crate depends on this one; it depends on nothing but
//! the standard library.
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `StepId`, `RankId` typed identifier wrappers   |
//! | [`record`] | `AgentRecord`, one agent's snapshot state      |
//! | [`config`] | `VizConfig`, the explicit run configuration    |

pub mod config;
pub mod ids;
pub mod record;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::VizConfig;
pub use ids::{RankId, StepId};
pub use record::AgentRecord;
