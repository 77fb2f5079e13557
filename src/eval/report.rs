//! Evaluation report: final per-run figures plus rendering.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

use super::accumulator::PrecisionRecallSnapshot;
use crate::chart::{format_value, Chart, Series};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::judgments::JudgmentSource;

/// Final figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: u32,
    pub retrieved_count: u64,
    pub relevant_count: u64,
    pub precision: f64,
    pub recall: f64,
    pub snapshots: Vec<PrecisionRecallSnapshot>,
}

impl RunSummary {
    /// Compact one-line description for logs.
    pub fn describe(&self, decimals: usize) -> String {
        format!(
            "run {} ({} retrieved, {} relevant, P={}, R={})",
            self.run_id,
            self.retrieved_count,
            self.relevant_count,
            format_value(self.precision, decimals),
            format_value(self.recall, decimals)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<JudgmentSource>,
    pub total_relevant: u32,
    pub snapshot_interval: u64,
    pub total_records: u64,
    /// Ascending by run id.
    pub runs: Vec<RunSummary>,
}

impl EvaluationReport {
    pub fn with_source(mut self, source: JudgmentSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Stamp the report with the current UTC time.
    pub fn stamped(mut self) -> Self {
        self.generated_at = Some(Utc::now());
        self
    }

    pub fn render(&self, format: OutputFormat, decimals: usize) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(decimals)),
            OutputFormat::Tsv => Ok(self.render_tsv(decimals)),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// One `Run <id>: Precision: <p>, Recall: <r>` line per run.
    pub fn render_text(&self, decimals: usize) -> String {
        let mut out = String::new();
        for run in &self.runs {
            let _ = writeln!(
                out,
                "Run {}: Precision: {:.*}, Recall: {:.*}",
                run.run_id, decimals, run.precision, decimals, run.recall
            );
        }
        out
    }

    pub fn render_tsv(&self, decimals: usize) -> String {
        let mut out = String::from("run_id\tretrieved\trelevant\tprecision\trecall\n");
        for run in &self.runs {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{:.*}\t{:.*}",
                run.run_id,
                run.retrieved_count,
                run.relevant_count,
                decimals,
                run.precision,
                decimals,
                run.recall
            );
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Precision and recall per run against documents retrieved, one point per snapshot.
    pub fn trend_chart(&self) -> Chart {
        let mut chart = Chart::new(
            format!(
                "Precision/recall every {} retrieved documents",
                self.snapshot_interval
            ),
            "Retrieved documents",
            "Value",
        );
        for run in &self.runs {
            let precision = run
                .snapshots
                .iter()
                .map(|s| (s.retrieved as f64, s.precision))
                .collect();
            let recall = run
                .snapshots
                .iter()
                .map(|s| (s.retrieved as f64, s.recall))
                .collect();
            chart.push_series(Series::new(format!("Run {} precision", run.run_id), precision));
            chart.push_series(Series::new(format!("Run {} recall", run.run_id), recall));
        }
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RelevanceAccumulator;
    use crate::judgments::JudgmentRecord;

    fn example_report() -> EvaluationReport {
        let input: Vec<_> = [(1, 5), (1, 0), (1, 3), (2, 0), (2, 7)]
            .iter()
            .map(|&(run, label)| JudgmentRecord::new(run, label))
            .collect();
        RelevanceAccumulator::from_records(100, &input)
            .unwrap()
            .summarize()
            .unwrap()
    }

    fn trend_report() -> EvaluationReport {
        let mut input = vec![JudgmentRecord::new(1, 1); 10];
        input.extend(vec![JudgmentRecord::new(1, 0); 10]);
        input.extend(vec![JudgmentRecord::new(2, 0); 5]);
        RelevanceAccumulator::from_records(100, &input)
            .unwrap()
            .summarize()
            .unwrap()
    }

    #[test]
    fn text_report_lines() {
        let text = example_report().render_text(3);
        assert_eq!(
            text,
            "Run 1: Precision: 0.667, Recall: 0.020\nRun 2: Precision: 0.500, Recall: 0.010\n"
        );
    }

    #[test]
    fn perfect_precision_prints_as_one() {
        let input = vec![JudgmentRecord::new(1, 1); 3];
        let report = RelevanceAccumulator::from_records(100, &input)
            .unwrap()
            .summarize()
            .unwrap();
        assert!(report.render_text(3).contains("Precision: 1.000"));
    }

    #[test]
    fn tsv_report_columns() {
        let tsv = example_report().render_tsv(2);
        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines[0], "run_id\tretrieved\trelevant\tprecision\trecall");
        assert_eq!(lines[1], "1\t3\t2\t0.67\t0.02");
        assert_eq!(lines[2], "2\t2\t1\t0.50\t0.01");
    }

    #[test]
    fn json_report_fields() {
        let json = example_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_relevant"], 100);
        assert_eq!(value["total_records"], 5);
        assert_eq!(value["runs"][1]["relevant_count"], 1);
        assert!(value.get("generated_at").is_none());
        assert!(value.get("source").is_none());
    }

    #[test]
    fn stamped_report_serializes_timestamp() {
        let report = example_report().stamped().with_source(JudgmentSource {
            path: "task.txt".to_string(),
            sha256: "abc".to_string(),
        });
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["source"]["path"], "task.txt");
    }

    #[test]
    fn trend_chart_series_per_run() {
        let chart = trend_report().trend_chart();
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[0].label, "Run 1 precision");
        assert_eq!(chart.series[0].points, vec![(10.0, 1.0), (20.0, 0.5)]);
        assert_eq!(chart.series[1].points, vec![(10.0, 0.1), (20.0, 0.1)]);
        // Run 2 never reaches ten documents.
        assert!(chart.series[2].points.is_empty());
        assert!(chart.title.contains("every 10"));
    }

    #[test]
    fn describe_mentions_counts() {
        let report = example_report();
        let line = report.runs[0].describe(3);
        assert_eq!(line, "run 1 (3 retrieved, 2 relevant, P=0.667, R=0.020)");
    }
}
