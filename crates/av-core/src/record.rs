//! The per-agent snapshot record.

/// One agent's state at one simulation step, as written by the producing
/// simulation: a position in rank-local grid units plus two status flags.
/// Agents carry no identity here; the renderer only needs where they are
/// and how to color them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentRecord {
    /// Rank-local X coordinate (grid units).
    pub x: f64,
    /// Y coordinate (grid units).
    pub y: f64,
    /// Dead agents render gray regardless of the rescue flag.
    pub is_alive: bool,
    /// Rescue worker vs. civilian; only meaningful while alive.
    pub is_rescue: bool,
}

impl AgentRecord {
    pub fn new(x: f64, y: f64, is_alive: bool, is_rescue: bool) -> Self {
        Self { x, y, is_alive, is_rescue }
    }
}
