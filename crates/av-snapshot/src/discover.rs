//! Snapshot file discovery.
//!
//! Snapshot files are named `step_<N>_rank_<M>.csv`; all metadata lives in
//! the filename, none in the file. Discovery walks one directory
//! (non-recursive), ignores anything without the glob shape
//! `step_*_rank_*.csv`, and strictly parses the rest. A glob-shaped name
//! whose step or rank segment is not a `u32` becomes a typed rejection
//! rather than a silent skip, so a producer bug like `step_final_rank_0.csv`
//! cannot make data vanish from the render.
//!
//! Results are sorted by parsed `(step, rank)`. The order is numeric, so
//! `step_10` sorts after `step_2` with or without zero padding.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use av_core::{RankId, StepId};

use crate::{SnapshotError, SnapshotResult};

/// Strict snapshot filename pattern. Anchored on both ends; the named
/// groups hold the digit runs.
static FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^step_(?<step>\d+)_rank_(?<rank>\d+)\.csv$")
        .expect("snapshot filename pattern is valid")
});

// ── Types ─────────────────────────────────────────────────────────────────────

/// Identity of one snapshot file, parsed from its name.
///
/// Orders by `(step, rank)`, which is the order snapshots are loaded and
/// the order ranks land in each step's bucket.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SnapshotId {
    pub step: StepId,
    pub rank: RankId,
}

impl SnapshotId {
    pub fn new(step: u32, rank: u32) -> Self {
        Self { step: StepId(step), rank: RankId(rank) }
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} rank {}", self.step, self.rank)
    }
}

/// A discovered, parseable snapshot file.
#[derive(Clone, Debug)]
pub struct SnapshotFile {
    pub id:   SnapshotId,
    pub path: PathBuf,
}

/// A file that failed strict filename parsing or, later in the pipeline,
/// loading.
#[derive(Debug)]
pub struct RejectedFile {
    pub path:  PathBuf,
    pub error: SnapshotError,
}

/// The outcome of scanning the data directory: parseable snapshots in
/// `(step, rank)` order, rejections in path order.
#[derive(Debug, Default)]
pub struct Discovery {
    pub snapshots: Vec<SnapshotFile>,
    pub rejected:  Vec<RejectedFile>,
}

// ── Filename parsing ──────────────────────────────────────────────────────────

/// `true` if `name` has the glob shape `step_*_rank_*.csv`.
///
/// Deliberately loose — exactly what a shell glob would match.
/// [`parse_filename`] is the strict half; a name that passes the shape
/// check but fails strict parsing is a rejection, not an ignore.
fn has_snapshot_shape(name: &str) -> bool {
    match name.strip_prefix("step_").and_then(|rest| rest.strip_suffix(".csv")) {
        Some(interior) => interior.contains("_rank_"),
        None => false,
    }
}

/// Strictly parse a snapshot filename into its id.
///
/// Returns `None` for non-numeric segments (including signs and decimal
/// points) and for numbers that overflow `u32`; both count as malformed
/// once a name has the glob shape.
pub fn parse_filename(name: &str) -> Option<SnapshotId> {
    let caps = FILENAME.captures(name)?;
    let step: u32 = caps["step"].parse().ok()?;
    let rank: u32 = caps["rank"].parse().ok()?;
    Some(SnapshotId::new(step, rank))
}

// ── Directory scan ────────────────────────────────────────────────────────────

/// Scan `dir` for snapshot files.
///
/// A missing directory yields an empty [`Discovery`], matching what a
/// shell glob over a missing directory yields; any other read failure is
/// an I/O error. Files without the snapshot shape are ignored.
pub fn discover(dir: &Path) -> SnapshotResult<Discovery> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Discovery::default()),
        Err(e) => return Err(SnapshotError::Io(e)),
    };

    let mut discovery = Discovery::default();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        // Non-UTF-8 names cannot match the ASCII pattern; skip them the way
        // the glob would.
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !has_snapshot_shape(name) {
            continue;
        }
        match parse_filename(name) {
            Some(id) => discovery.snapshots.push(SnapshotFile { id, path }),
            None => {
                let error = SnapshotError::Filename(name.to_owned());
                discovery.rejected.push(RejectedFile { path, error });
            }
        }
    }

    // read_dir order is platform-arbitrary; sort so runs are deterministic.
    discovery.snapshots.sort_by_key(|s| s.id);
    discovery.rejected.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(discovery)
}
