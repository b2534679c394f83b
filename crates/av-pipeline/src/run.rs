//! The pipeline runner.

use std::fs;

use av_core::VizConfig;
use av_render::render_frame;
use av_snapshot::{discover, load_records, RejectedFile, StepIndex};

use crate::clean::clean_frames;
use crate::observer::RunObserver;
use crate::report::{RenderedFrame, RunReport};
use crate::{PipelineError, PipelineResult};

// ── FailurePolicy ─────────────────────────────────────────────────────────────

/// What to do when a snapshot file is malformed: a glob-shaped name that
/// fails strict parsing, a bad table, or an unreadable file.
///
/// The choice covers malformed *inputs* only. Cleanup and render failures
/// are fatal under either policy.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FailurePolicy {
    /// Abort the whole run on the first malformed file, before any frame
    /// is written.
    #[default]
    FailFast,
    /// Record the failure in the [`RunReport`] and continue with the
    /// remaining files.
    SkipAndReport,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// The whole batch: clean stale frames, discover snapshots, build the step
/// index, render one frame per distinct step in ascending step order.
///
/// # Example
///
/// ```rust,ignore
/// let config = VizConfig { data_dir: "mpi_logs".into(), ..VizConfig::default() };
/// let report = Pipeline::new(config)
///     .failure_policy(FailurePolicy::SkipAndReport)
///     .run(&mut NoopObserver)?;
/// println!("{} frame(s)", report.frames.len());
/// ```
pub struct Pipeline {
    config: VizConfig,
    policy: FailurePolicy,
}

impl Pipeline {
    /// A pipeline over `config` with the default fail-fast policy.
    pub fn new(config: VizConfig) -> Self {
        Self { config, policy: FailurePolicy::default() }
    }

    /// Choose how malformed snapshot files are handled.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the batch. Returns the report on success. Under
    /// [`FailurePolicy::FailFast`] the first malformed file aborts the run
    /// with stale frames already removed and no new frames written.
    pub fn run<O: RunObserver>(&self, observer: &mut O) -> PipelineResult<RunReport> {
        let mut report = RunReport::default();

        // 1. Cleanup. Stale frames from a previous run must never survive
        //    into this run's output set.
        report.stale_frames_removed = clean_frames(&self.config.output_dir)
            .map_err(|source| PipelineError::Clean {
                dir: self.config.output_dir.clone(),
                source,
            })?;
        observer.on_cleanup(report.stale_frames_removed);

        // 2. Discovery.
        let discovery = discover(&self.config.data_dir).map_err(|source| {
            PipelineError::Discover { dir: self.config.data_dir.clone(), source }
        })?;
        self.absorb_failures(discovery.rejected, &mut report, observer)?;

        // 3. Aggregation.
        let mut index = StepIndex::new();
        for file in discovery.snapshots {
            match load_records(&file.path) {
                Ok(records) => {
                    observer.on_snapshot_loaded(&file, records.len());
                    report.snapshots_loaded += 1;
                    index.insert(file.id, records);
                }
                Err(error) => {
                    let failed = vec![RejectedFile { path: file.path, error }];
                    self.absorb_failures(failed, &mut report, observer)?;
                }
            }
        }

        // 4. Rendering, ascending step order.
        fs::create_dir_all(&self.config.output_dir)?;
        for (step, ranks) in index.steps() {
            let agents: usize = ranks.iter().map(|(_, records)| records.len()).sum();
            let path = render_frame(&self.config, step, ranks)
                .map_err(|source| PipelineError::Render { step, source })?;
            observer.on_frame_rendered(step, &path, agents);
            report.agents_plotted += agents;
            report.frames.push(RenderedFrame { step, path, agents });
        }

        observer.on_run_end(&report);
        Ok(report)
    }

    /// Apply the failure policy to a batch of per-file failures.
    fn absorb_failures<O: RunObserver>(
        &self,
        failures: Vec<RejectedFile>,
        report:   &mut RunReport,
        observer: &mut O,
    ) -> PipelineResult<()> {
        for failure in failures {
            match self.policy {
                FailurePolicy::FailFast => {
                    return Err(PipelineError::Snapshot {
                        path:   failure.path,
                        source: failure.error,
                    });
                }
                FailurePolicy::SkipAndReport => {
                    observer.on_snapshot_skipped(&failure.path, &failure.error);
                    report.skipped.push(failure);
                }
            }
        }
        Ok(())
    }
}
