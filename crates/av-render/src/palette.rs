//! Agent color policy.
//!
//! Three classes, one color each, so a reader can tell rescuers,
//! civilians, and casualties apart at a glance:
//!
//! | Class          | Condition              | Color |
//! |----------------|------------------------|-------|
//! | `LiveRescuer`  | alive ∧ rescue-flagged | green |
//! | `LiveCivilian` | alive ∧ ¬rescue        | red   |
//! | `Dead`         | ¬alive                 | gray  |
//!
//! Classification is an exhaustive match over the two flags, so every
//! record gets exactly one color.

use std::fmt;

use plotters::style::RGBColor;

use av_core::AgentRecord;

const GREEN: RGBColor = RGBColor(0, 128, 0);
const RED:   RGBColor = RGBColor(255, 0, 0);
const GRAY:  RGBColor = RGBColor(128, 128, 128);

/// The three render classes an agent record can fall into.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AgentClass {
    LiveRescuer,
    LiveCivilian,
    Dead,
}

impl AgentClass {
    /// Classify a record. Liveness wins: a dead agent is `Dead` whatever
    /// its rescue flag says.
    pub fn of(record: &AgentRecord) -> AgentClass {
        match (record.is_alive, record.is_rescue) {
            (true, true)  => AgentClass::LiveRescuer,
            (true, false) => AgentClass::LiveCivilian,
            (false, _)    => AgentClass::Dead,
        }
    }

    /// Marker color for this class.
    pub fn color(self) -> RGBColor {
        match self {
            AgentClass::LiveRescuer  => GREEN,
            AgentClass::LiveCivilian => RED,
            AgentClass::Dead         => GRAY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentClass::LiveRescuer  => "live rescuer",
            AgentClass::LiveCivilian => "live civilian",
            AgentClass::Dead         => "dead",
        }
    }
}

impl fmt::Display for AgentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
