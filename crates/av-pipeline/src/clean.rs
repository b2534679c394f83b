//! Stale-frame cleanup.
//!
//! Frames are regenerated from scratch every run; a frame left over from a
//! previous run over different steps would silently survive and corrupt
//! the sequence. Cleanup therefore deletes every `frame_step_*.png` in the
//! output directory before rendering begins.

use std::fs;
use std::io;
use std::path::Path;

use av_render::is_frame_filename;

/// Delete previously rendered frames from `dir`, returning how many were
/// removed.
///
/// A missing directory (or no matches) is a no-op returning zero, so
/// running twice in a row is safe. A deletion denied by the filesystem
/// propagates as the error it is.
pub fn clean_frames(dir: &Path) -> io::Result<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_frame_filename(name) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}
