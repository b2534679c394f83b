//! `StepIndex` — per-step grouping of loaded snapshots.
//!
//! The render loop wants "every rank's records for step N" with steps in
//! ascending numeric order. A `BTreeMap` keyed by `StepId` gives exactly
//! that iteration order; each bucket holds `(rank, records)` pairs in
//! insertion order, which in the normal pipeline (discovery sorts by
//! `(step, rank)`) means ascending rank.

use std::collections::BTreeMap;

use av_core::{AgentRecord, RankId, StepId};

use crate::SnapshotId;

/// Mapping from step number to the ranks (and their records) seen for it.
#[derive(Debug, Default)]
pub struct StepIndex {
    inner: BTreeMap<StepId, Vec<(RankId, Vec<AgentRecord>)>>,
    /// Cached total record count so `agent_count` is O(1).
    agents: usize,
}

impl StepIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a loaded snapshot under its step, creating the bucket on the
    /// step's first appearance. A rank with zero records still registers
    /// its step.
    pub fn insert(&mut self, id: SnapshotId, records: Vec<AgentRecord>) {
        self.agents += records.len();
        self.inner.entry(id.step).or_default().push((id.rank, records));
    }

    /// Iterate steps in ascending numeric order.
    pub fn steps(&self) -> impl Iterator<Item = (StepId, &[(RankId, Vec<AgentRecord>)])> + '_ {
        self.inner.iter().map(|(step, ranks)| (*step, ranks.as_slice()))
    }

    /// Number of distinct steps present.
    pub fn step_count(&self) -> usize {
        self.inner.len()
    }

    /// Total agent records across all steps and ranks.
    pub fn agent_count(&self) -> usize {
        self.agents
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
