//! Ratio metrics: precision and recall from raw counts.
//!
//! Both refuse a zero denominator instead of reporting 0.0, so an empty run
//! can never pass for a run that retrieved nothing relevant.

use crate::error::{IrevalError, Result};

/// Precision: relevant retrieved / retrieved.
pub fn precision(run_id: u32, relevant: u64, retrieved: u64) -> Result<f64> {
    if retrieved == 0 {
        return Err(IrevalError::DivisionByZero {
            run_id,
            reason: "no retrieved documents".to_string(),
        });
    }
    Ok(relevant as f64 / retrieved as f64)
}

/// Recall: relevant retrieved / size of the ground-truth relevant set.
pub fn recall(run_id: u32, relevant: u64, total_relevant: u32) -> Result<f64> {
    if total_relevant == 0 {
        return Err(IrevalError::DivisionByZero {
            run_id,
            reason: "total relevant documents is 0".to_string(),
        });
    }
    Ok(relevant as f64 / f64::from(total_relevant))
}
