//! Single-pass accumulation of retrieved/relevant counts per run.
//!
//! Records are consumed in file order. Every `snapshot_interval` records of a
//! run, the running precision and recall are captured, producing the
//! "by tenth" trend curve for that run. Reordering the input changes the
//! snapshots, so callers must feed records exactly as they were judged.

use serde::Serialize;
use std::collections::BTreeMap;

use super::metrics;
use super::report::{EvaluationReport, RunSummary};
use crate::config::EvaluationConfig;
use crate::error::{IrevalError, Result};
use crate::judgments::JudgmentRecord;

/// Precision and recall measured after the first `retrieved` documents of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionRecallSnapshot {
    pub retrieved: u64,
    pub precision: f64,
    pub recall: f64,
}

/// Running counts for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub run_id: u32,
    pub retrieved_count: u64,
    pub relevant_count: u64,
    pub snapshots: Vec<PrecisionRecallSnapshot>,
}

impl RunStats {
    pub fn new(run_id: u32) -> Self {
        Self {
            run_id,
            retrieved_count: 0,
            relevant_count: 0,
            snapshots: Vec::new(),
        }
    }

    /// Fails with DivisionByZero when nothing was retrieved.
    pub fn precision(&self) -> Result<f64> {
        metrics::precision(self.run_id, self.relevant_count, self.retrieved_count)
    }

    pub fn recall(&self, total_relevant: u32) -> Result<f64> {
        metrics::recall(self.run_id, self.relevant_count, total_relevant)
    }
}

impl PrecisionRecallSnapshot {
    fn at(run_id: u32, relevant: u64, retrieved: u64, total_relevant: u32) -> Result<Self> {
        Ok(Self {
            retrieved,
            precision: metrics::precision(run_id, relevant, retrieved)?,
            recall: metrics::recall(run_id, relevant, total_relevant)?,
        })
    }
}

/// Groups judgment records by run and tracks precision/recall as they arrive.
#[derive(Debug, Clone)]
pub struct RelevanceAccumulator {
    total_relevant: u32,
    snapshot_interval: u64,
    runs: BTreeMap<u32, RunStats>,
    total_records: u64,
}

impl RelevanceAccumulator {
    /// Ground-truth relevant documents per run in the course assignment.
    pub const DEFAULT_TOTAL_RELEVANT: u32 = 100;
    /// Records per run between snapshots.
    pub const DEFAULT_SNAPSHOT_INTERVAL: u64 = 10;

    pub fn new(total_relevant: u32) -> Self {
        Self {
            total_relevant,
            snapshot_interval: Self::DEFAULT_SNAPSHOT_INTERVAL,
            runs: BTreeMap::new(),
            total_records: 0,
        }
    }

    /// Take snapshots every `interval` records instead of every 10.
    pub fn with_snapshot_interval(mut self, interval: u64) -> Result<Self> {
        if interval == 0 {
            return Err(IrevalError::Config(
                "snapshot interval must be greater than 0".to_string(),
            ));
        }
        self.snapshot_interval = interval;
        Ok(self)
    }

    pub fn from_config(config: &EvaluationConfig) -> Result<Self> {
        Self::new(config.total_relevant).with_snapshot_interval(config.snapshot_interval)
    }

    /// Accumulate a whole record sequence with default snapshot spacing.
    pub fn from_records(total_relevant: u32, records: &[JudgmentRecord]) -> Result<Self> {
        let mut acc = Self::new(total_relevant);
        acc.accumulate(records)?;
        Ok(acc)
    }

    /// Process one record.
    ///
    /// Nothing is committed unless the whole step succeeds, so a failed
    /// snapshot leaves the accumulator exactly as it was before the call.
    pub fn observe(&mut self, record: &JudgmentRecord) -> Result<()> {
        let (retrieved, relevant) = self
            .runs
            .get(&record.run_id)
            .map_or((0, 0), |s| (s.retrieved_count, s.relevant_count));
        let retrieved = retrieved + 1;
        let relevant = relevant + u64::from(record.is_relevant());

        let snapshot = if retrieved % self.snapshot_interval == 0 {
            Some(PrecisionRecallSnapshot::at(
                record.run_id,
                relevant,
                retrieved,
                self.total_relevant,
            )?)
        } else {
            None
        };

        let stats = self
            .runs
            .entry(record.run_id)
            .or_insert_with(|| RunStats::new(record.run_id));
        stats.retrieved_count = retrieved;
        stats.relevant_count = relevant;
        stats.snapshots.extend(snapshot);

        self.total_records += 1;
        Ok(())
    }

    /// Process records in order.
    pub fn accumulate<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a JudgmentRecord>,
    {
        for record in records {
            self.observe(record)?;
        }
        Ok(())
    }

    pub fn total_relevant(&self) -> u32 {
        self.total_relevant
    }

    pub fn snapshot_interval(&self) -> u64 {
        self.snapshot_interval
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Observed run ids, ascending.
    pub fn run_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.runs.keys().copied()
    }

    /// Observed runs, ascending by run id.
    pub fn runs(&self) -> impl Iterator<Item = &RunStats> {
        self.runs.values()
    }

    pub fn run(&self, run_id: u32) -> Result<&RunStats> {
        self.runs
            .get(&run_id)
            .ok_or(IrevalError::MissingRunData(run_id))
    }

    pub fn precision(&self, run_id: u32) -> Result<f64> {
        self.run(run_id)?.precision()
    }

    pub fn recall(&self, run_id: u32) -> Result<f64> {
        self.run(run_id)?.recall(self.total_relevant)
    }

    /// Final figures for every run, ascending by run id.
    pub fn summarize(&self) -> Result<EvaluationReport> {
        let mut runs = Vec::with_capacity(self.runs.len());
        for stats in self.runs.values() {
            let summary = RunSummary {
                run_id: stats.run_id,
                retrieved_count: stats.retrieved_count,
                relevant_count: stats.relevant_count,
                precision: stats.precision()?,
                recall: stats.recall(self.total_relevant)?,
                snapshots: stats.snapshots.clone(),
            };
            log::debug!(
                "Run {}: retrieved={}, relevant={}, snapshots={}",
                summary.run_id,
                summary.retrieved_count,
                summary.relevant_count,
                summary.snapshots.len()
            );
            runs.push(summary);
        }

        Ok(EvaluationReport {
            generated_at: None,
            source: None,
            total_relevant: self.total_relevant,
            snapshot_interval: self.snapshot_interval,
            total_records: self.total_records,
            runs,
        })
    }
}

impl Default for RelevanceAccumulator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOTAL_RELEVANT)
    }
}
