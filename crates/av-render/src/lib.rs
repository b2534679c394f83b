//! `av-render` — scatter-frame rendering for agentviz.
//!
//! Turns one step's worth of agent records into a single PNG: each MPI
//! rank occupies its own horizontal band, and each agent is a filled dot
//! colored by the liveness/rescue policy in [`palette`].
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`frame`]   | [`render_frame`], frame file naming        |
//! | [`layout`]  | [`FrameLayout`] rank-band geometry         |
//! | [`palette`] | [`AgentClass`] color policy                |
//! | [`error`]   | [`RenderError`], [`RenderResult`]          |

pub mod error;
pub mod frame;
pub mod layout;
pub mod palette;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RenderError, RenderResult};
pub use frame::{frame_filename, is_frame_filename, render_frame, FRAME_PREFIX, FRAME_SUFFIX};
pub use layout::FrameLayout;
pub use palette::AgentClass;
