//! Evaluation of retrieval runs: per-run precision/recall accumulation and reports.

pub mod accumulator;
pub mod metrics;
pub mod report;

pub use accumulator::{PrecisionRecallSnapshot, RelevanceAccumulator, RunStats};
pub use metrics::{precision, recall};
pub use report::{EvaluationReport, RunSummary};
