//! Unit tests for av-pipeline.

use std::fs;
use std::path::Path;

use av_core::VizConfig;

use crate::{clean_frames, FailurePolicy, NoopObserver, Pipeline};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TWO_AGENTS: &str = "x,y,is_alive,is_rescue\n1,1,1,0\n2,2,1,1\n";
const ONE_DEAD:   &str = "x,y,is_alive,is_rescue\n1,1,0,0\n";

/// A config rendering small frames from `data` into `out`.
fn config(data: &Path, out: &Path) -> VizConfig {
    VizConfig {
        data_dir:        data.to_path_buf(),
        output_dir:      out.to_path_buf(),
        grid_size:       20.0,
        frame_width_px:  200,
        frame_height_px: 200,
    }
}

fn write_snapshot(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

/// Frame filenames present in `dir`, sorted.
fn frame_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("frame_step_"))
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod cleanup {
    use super::*;

    #[test]
    fn removes_only_frame_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frame_step_0.png"), b"x").unwrap();
        fs::write(dir.path().join("frame_step_17.png"), b"x").unwrap();
        fs::write(dir.path().join("keep.png"), b"x").unwrap();
        fs::write(dir.path().join("frame_step_0.csv"), b"x").unwrap();

        let removed = clean_frames(dir.path()).unwrap();

        assert_eq!(removed, 2);
        assert!(dir.path().join("keep.png").exists());
        assert!(dir.path().join("frame_step_0.csv").exists());
        assert!(!dir.path().join("frame_step_0.png").exists());
    }

    #[test]
    fn idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frame_step_3.png"), b"x").unwrap();

        assert_eq!(clean_frames(dir.path()).unwrap(), 1);
        assert_eq!(clean_frames(dir.path()).unwrap(), 0);
    }

    #[test]
    fn missing_directory_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(clean_frames(&missing).unwrap(), 0);
    }
}

#[cfg(test)]
mod runs {
    use av_core::StepId;

    use super::*;

    #[test]
    fn one_frame_per_distinct_step() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_0_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_0_rank_1.csv", ONE_DEAD);
        write_snapshot(&data, "step_3_rank_0.csv", TWO_AGENTS);

        let report = Pipeline::new(config(&data, &out))
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.snapshots_loaded, 3);
        assert_eq!(report.frames.len(), 2);
        assert_eq!(report.agents_plotted, 5);
        assert!(report.is_clean());
        assert_eq!(frame_names(&out), vec!["frame_step_0.png", "frame_step_3.png"]);
    }

    #[test]
    fn frames_render_in_ascending_step_order() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_10_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_2_rank_0.csv", TWO_AGENTS);

        let report = Pipeline::new(config(&data, &out))
            .run(&mut NoopObserver)
            .unwrap();

        let steps: Vec<StepId> = report.frames.iter().map(|f| f.step).collect();
        assert_eq!(steps, vec![StepId(2), StepId(10)]);
    }

    #[test]
    fn empty_input_set_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs"); // never created
        let out = dir.path().join("frames");

        let report = Pipeline::new(config(&data, &out))
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.snapshots_loaded, 0);
        assert!(report.frames.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn stale_frames_removed_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(&out).unwrap();
        // A frame for a step absent from the current input set.
        fs::write(out.join("frame_step_999.png"), b"stale").unwrap();
        write_snapshot(&data, "step_1_rank_0.csv", TWO_AGENTS);

        let report = Pipeline::new(config(&data, &out))
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.stale_frames_removed, 1);
        assert_eq!(frame_names(&out), vec!["frame_step_1.png"]);
    }

    #[test]
    fn rerun_yields_identical_frame_names() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_1_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_4_rank_0.csv", ONE_DEAD);

        let pipeline = Pipeline::new(config(&data, &out));
        pipeline.run(&mut NoopObserver).unwrap();
        let first = frame_names(&out);

        let report = pipeline.run(&mut NoopObserver).unwrap();
        assert_eq!(report.stale_frames_removed, 2);
        assert_eq!(frame_names(&out), first);
    }

    #[test]
    fn fail_fast_aborts_on_bad_filename_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_abc_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_1_rank_0.csv", TWO_AGENTS);

        let result = Pipeline::new(config(&data, &out)).run(&mut NoopObserver);

        assert!(result.is_err());
        // Aborted before producing any output.
        assert!(!out.exists());
    }

    #[test]
    fn fail_fast_aborts_on_bad_table() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_0_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_1_rank_0.csv", "x,y,is_alive,is_rescue\n1,1,maybe,0\n");

        let result = Pipeline::new(config(&data, &out)).run(&mut NoopObserver);

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[test]
    fn skip_and_report_renders_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_x_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_5_rank_0.csv", "x,y,is_alive,is_rescue\n1,1,maybe,0\n");
        write_snapshot(&data, "step_1_rank_0.csv", TWO_AGENTS);

        let report = Pipeline::new(config(&data, &out))
            .failure_policy(FailurePolicy::SkipAndReport)
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.snapshots_loaded, 1);
        assert_eq!(report.frames.len(), 1);
        assert!(!report.is_clean());
        assert_eq!(frame_names(&out), vec!["frame_step_1.png"]);
    }

    #[test]
    fn two_rank_scenario() {
        // Rank 0 holds a live civilian at (1,1), rank 1 a dead agent at
        // (1,1); both land in the single frame for step 0.
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_0_rank_0.csv", "x,y,is_alive,is_rescue\n1,1,1,0\n");
        write_snapshot(&data, "step_0_rank_1.csv", "x,y,is_alive,is_rescue\n1,1,0,0\n");

        let report = Pipeline::new(config(&data, &out))
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(report.frames.len(), 1);
        assert_eq!(report.frames[0].step, StepId(0));
        assert_eq!(report.frames[0].agents, 2);
        assert!(out.join("frame_step_0.png").exists());
    }
}

#[cfg(test)]
mod observers {
    use av_core::StepId;
    use av_snapshot::{SnapshotError, SnapshotFile};

    use crate::{RunObserver, RunReport};

    use super::*;

    #[derive(Default)]
    struct Counting {
        cleanups: usize,
        loaded:   usize,
        skipped:  usize,
        frames:   usize,
        ended:    usize,
    }

    impl RunObserver for Counting {
        fn on_cleanup(&mut self, _removed: usize) {
            self.cleanups += 1;
        }
        fn on_snapshot_loaded(&mut self, _file: &SnapshotFile, _agents: usize) {
            self.loaded += 1;
        }
        fn on_snapshot_skipped(&mut self, _path: &Path, _error: &SnapshotError) {
            self.skipped += 1;
        }
        fn on_frame_rendered(&mut self, _step: StepId, _path: &Path, _agents: usize) {
            self.frames += 1;
        }
        fn on_run_end(&mut self, _report: &RunReport) {
            self.ended += 1;
        }
    }

    #[test]
    fn observer_sees_every_stage() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("logs");
        let out = dir.path().join("frames");
        fs::create_dir_all(&data).unwrap();
        write_snapshot(&data, "step_0_rank_0.csv", TWO_AGENTS);
        write_snapshot(&data, "step_2_rank_0.csv", ONE_DEAD);
        write_snapshot(&data, "step_x_rank_0.csv", TWO_AGENTS);

        let mut counting = Counting::default();
        Pipeline::new(config(&data, &out))
            .failure_policy(FailurePolicy::SkipAndReport)
            .run(&mut counting)
            .unwrap();

        assert_eq!(counting.cleanups, 1);
        assert_eq!(counting.loaded, 2);
        assert_eq!(counting.skipped, 1);
        assert_eq!(counting.frames, 2);
        assert_eq!(counting.ended, 1);
    }
}
