pub mod config;
pub mod error;
pub mod judgments;
pub mod eval;
pub mod chart;
pub mod montecarlo;

pub use config::{Config, OutputFormat};
pub use error::{IrevalError, Result};
pub use eval::{EvaluationReport, RelevanceAccumulator, RunStats};
pub use judgments::JudgmentRecord;
