//! Snapshot CSV loader.
//!
//! # CSV format
//!
//! One row per agent. The header must contain `x`, `y`, `is_alive`, and
//! `is_rescue`; extra columns (the MPI simulators write a leading `id`)
//! are ignored. Boolean columns hold `0`/`1` the way C++ streams print
//! `bool`, but textual `true`/`false` in common casings also parses.
//!
//! ```csv
//! id,x,y,is_rescue,is_alive
//! 0,14,3,0,1
//! 1,2.5,7.25,1,1
//! 2,9,9,0,0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use av_core::AgentRecord;

use crate::{SnapshotError, SnapshotResult};

/// Header columns every snapshot table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["x", "y", "is_alive", "is_rescue"];

// ── CSV record types ──────────────────────────────────────────────────────────

/// Raw CSV row. Field names match the header; unknown columns are ignored
/// by serde's default behavior for `csv`.
#[derive(Deserialize)]
struct AgentRow {
    x: f64,
    y: f64,
    #[serde(deserialize_with = "boolish")]
    is_alive: bool,
    #[serde(deserialize_with = "boolish")]
    is_rescue: bool,
}

/// Accept the boolean spellings snapshot producers actually emit.
fn boolish<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(de)?;
    match raw.trim() {
        "1" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "false" | "False" | "FALSE" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a boolean-like value (0/1/true/false), got {other:?}"
        ))),
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load all agent records from one snapshot CSV file.
pub fn load_records(path: &Path) -> SnapshotResult<Vec<AgentRecord>> {
    let file = File::open(path).map_err(SnapshotError::Io)?;
    read_records(file)
}

/// Like [`load_records`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn read_records<R: Read>(reader: R) -> SnapshotResult<Vec<AgentRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    // Validate the header up front so a missing required column fails
    // loudly even when the table has zero data rows.
    let headers = csv_reader
        .headers()
        .map_err(|e| SnapshotError::Parse(e.to_string()))?;
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(SnapshotError::Parse(format!(
                "missing required column {required:?}"
            )));
        }
    }

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<AgentRow>() {
        let row = result.map_err(|e| SnapshotError::Parse(e.to_string()))?;
        records.push(AgentRecord::new(row.x, row.y, row.is_alive, row.is_rescue));
    }
    Ok(records)
}
