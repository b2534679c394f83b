//! Strongly typed, zero-cost identifier wrappers.
//!
//! Steps and ranks are parsed out of snapshot filenames and flow through the
//! whole pipeline: as map keys in the step index, as the band multiplier in
//! frame layout, and interpolated into frame names and chart captions.
//! Wrapping them keeps a step from ever being handed to something expecting
//! a rank. `Display` prints the bare number so ids drop straight into
//! `format!` strings.

use std::fmt;

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as an index or count.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            #[inline(always)]
            fn from(n: u32) -> Self {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Simulation step number parsed from a snapshot filename.
    ///
    /// Ordering is numeric (derived from the inner `u32`), so step 10 sorts
    /// after step 2 regardless of how the filename was padded.
    pub struct StepId;
}

typed_id! {
    /// MPI rank number parsed from a snapshot filename.
    ///
    /// Ranks need not be contiguous; a missing rank simply leaves its
    /// horizontal band empty in the rendered frame.
    pub struct RankId;
}
