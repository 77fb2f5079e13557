use std::path::Path;

use super::{JudgmentRecord, JudgmentSource};
use crate::error::{IrevalError, Result};

/// Minimum number of whitespace-delimited fields in a data row:
/// run id, document token, relevance label.
const MIN_FIELDS: usize = 3;

/// Read and parse a judgment file.
///
/// The file is read once; the returned source fingerprints exactly the bytes
/// that were parsed.
pub fn load_judgments(
    path: &Path,
    comment_prefix: &str,
) -> Result<(Vec<JudgmentRecord>, JudgmentSource)> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_judgments(&content, comment_prefix)?;
    let source = JudgmentSource::new(path, content.as_bytes());
    log::info!(
        "Loaded {} judgment records from {} (sha256 {})",
        records.len(),
        path.display(),
        source.sha256
    );
    Ok((records, source))
}

/// Parse judgment rows in file order.
///
/// Everything from `comment_prefix` to the end of a line is ignored, as are
/// blank lines. An empty `comment_prefix` disables comment stripping.
/// Each remaining row must hold at least three fields: an integer
/// run id, an arbitrary document token, and an integer relevance label.
/// Further fields are ignored.
pub fn parse_judgments(content: &str, comment_prefix: &str) -> Result<Vec<JudgmentRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let data = strip_comment(raw_line, comment_prefix).unwrap_or(raw_line);

        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.is_empty() {
            skipped += 1;
            continue;
        }
        if fields.len() < MIN_FIELDS {
            return Err(IrevalError::MalformedInput {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}: {:?}",
                    MIN_FIELDS,
                    fields.len(),
                    data.trim()
                ),
            });
        }

        let run_id = parse_run_id(fields[0], line_no)?;
        let relevance_label = fields[2].parse::<i64>().map_err(|e| IrevalError::MalformedInput {
            line: line_no,
            reason: format!("invalid relevance label {:?}: {}", fields[2], e),
        })?;

        records.push(JudgmentRecord {
            run_id,
            relevance_label,
        });
    }

    log::debug!(
        "Parsed {} records, skipped {} comment/blank lines",
        records.len(),
        skipped
    );
    Ok(records)
}

/// Text before the comment marker, or None when the line has no comment.
fn strip_comment<'a>(line: &'a str, comment_prefix: &str) -> Option<&'a str> {
    if comment_prefix.is_empty() {
        return None;
    }
    line.find(comment_prefix).map(|pos| &line[..pos])
}

fn parse_run_id(field: &str, line_no: usize) -> Result<u32> {
    let value = field.parse::<i64>().map_err(|e| IrevalError::MalformedInput {
        line: line_no,
        reason: format!("invalid run id {:?}: {}", field, e),
    })?;
    if value <= 0 {
        return Err(IrevalError::MalformedInput {
            line: line_no,
            reason: format!("run id must be positive, got {}", value),
        });
    }
    u32::try_from(value).map_err(|_| IrevalError::MalformedInput {
        line: line_no,
        reason: format!("run id {} is out of range", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judgments::compute_content_hash;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_rows() {
        let content = "1 doc_a 5\n1 doc_b 0\n2 doc_c 3\n";
        let records = parse_judgments(content, "//").unwrap();
        assert_eq!(
            records,
            vec![
                JudgmentRecord::new(1, 5),
                JudgmentRecord::new(1, 0),
                JudgmentRecord::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "// run doc label\n\n1 d1 1\n   \n// trailing\n2 d2 0\n";
        let records = parse_judgments(content, "//").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], JudgmentRecord::new(2, 0));
    }

    #[test]
    fn test_parse_strips_inline_comment() {
        let records = parse_judgments("3 d9 2 // judged twice\n", "//").unwrap();
        assert_eq!(records, vec![JudgmentRecord::new(3, 2)]);
    }

    #[test]
    fn test_parse_ignores_extra_fields_and_tabs() {
        let records = parse_judgments("4\tdoc.pdf\t-1\textra stuff\n", "//").unwrap();
        assert_eq!(records, vec![JudgmentRecord::new(4, -1)]);
    }

    #[test]
    fn test_parse_too_few_fields() {
        let err = parse_judgments("1 d1 1\n2 d2\n", "//").unwrap_err();
        match err {
            IrevalError::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_run_id() {
        let err = parse_judgments("x d1 1\n", "//").unwrap_err();
        assert!(matches!(err, IrevalError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_parse_non_positive_run_id() {
        let err = parse_judgments("0 d1 1\n", "//").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
        let err = parse_judgments("-3 d1 1\n", "//").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_parse_bad_label() {
        let err = parse_judgments("// header\n1 d1 yes\n", "//").unwrap_err();
        match err {
            IrevalError::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("relevance label"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_custom_comment_prefix() {
        let records = parse_judgments("# header\n1 d1 1 # note\n", "#").unwrap();
        assert_eq!(records, vec![JudgmentRecord::new(1, 1)]);
    }

    #[test]
    fn test_parse_empty_prefix_keeps_all_rows() {
        let records = parse_judgments("1 d 1\n2 d 0\n", "").unwrap();
        assert_eq!(
            records,
            vec![JudgmentRecord::new(1, 1), JudgmentRecord::new(2, 0)]
        );
    }

    #[test]
    fn test_parse_empty_prefix_rejects_comment_text() {
        // Without comment syntax a "//" header is just a malformed row.
        let err = parse_judgments("// run doc label\n1 d 1\n", "").unwrap_err();
        assert!(matches!(err, IrevalError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_load_judgments_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("task.txt");
        let content = "// run doc label\n1 a 1\n1 b 0\n";
        std::fs::write(&path, content).unwrap();
        let (records, source) = load_judgments(&path, "//").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(source.path, path.display().to_string());
        assert_eq!(source.sha256, compute_content_hash(content.as_bytes()));
    }

    #[test]
    fn test_load_judgments_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_judgments(&dir.path().join("nope.txt"), "//");
        assert!(matches!(result, Err(IrevalError::Io(_))));
    }
}
