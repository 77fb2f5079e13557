//! Relevance judgments: the record type and the flat-file loader.
//!
//! A judgment file lists one retrieved document per row, tagged with the run
//! that retrieved it and an integer relevance label.

mod parser;
mod source;

pub use parser::{load_judgments, parse_judgments};
pub use source::{compute_content_hash, JudgmentSource};

use serde::{Deserialize, Serialize};

/// A single judged retrieval: which run retrieved the document and how relevant it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    /// Positive, 1-based run identifier.
    pub run_id: u32,
    /// Relevance label; anything above zero counts as relevant.
    pub relevance_label: i64,
}

impl JudgmentRecord {
    pub fn new(run_id: u32, relevance_label: i64) -> Self {
        Self {
            run_id,
            relevance_label,
        }
    }

    /// Returns true if the label marks the document as relevant (> 0).
    pub fn is_relevant(&self) -> bool {
        self.relevance_label > 0
    }
}
