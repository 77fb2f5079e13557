use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Provenance of a judgment file, recorded in evaluation reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgmentSource {
    pub path: String,
    pub sha256: String,
}

impl JudgmentSource {
    /// Fingerprint `content` as read from `path`
    pub fn new(path: &Path, content: &[u8]) -> Self {
        Self {
            path: path.display().to_string(),
            sha256: compute_content_hash(content),
        }
    }
}

/// Compute SHA256 hash of file contents
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let hash = hasher.finalize();
    format!("{:x}", hash)
}
