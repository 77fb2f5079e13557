//! Line-chart data, independent of any plotting backend.
//!
//! A [`Chart`] is a title, two axis labels and labelled series of (x, y)
//! points. It renders to TSV (long format: one row per point) or JSON so any
//! plotting tool can draw it, or to plain text for a terminal.

use serde::Serialize;
use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::error::Result;

/// One labelled line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn render(&self, format: OutputFormat, decimals: usize) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text(decimals)),
            OutputFormat::Tsv => Ok(self.render_tsv(decimals)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn render_text(&self, decimals: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "x: {}, y: {}", self.x_label, self.y_label);
        for series in &self.series {
            let _ = writeln!(out, "\n{}", series.label);
            for &(x, y) in &series.points {
                let _ = writeln!(
                    out,
                    "  {:>8} {}",
                    format_value(x, 0),
                    format_value(y, decimals)
                );
            }
        }
        out
    }

    /// Long-format TSV: `series`, x label, y label columns.
    pub fn render_tsv(&self, decimals: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "series\t{}\t{}", self.x_label, self.y_label);
        for series in &self.series {
            for &(x, y) in &series.points {
                let _ = writeln!(
                    out,
                    "{}\t{}\t{}",
                    series.label,
                    format_value(x, 0),
                    format_value(y, decimals)
                );
            }
        }
        out
    }
}

/// Fixed-point with `decimals` places, switching to scientific notation for
/// non-zero magnitudes that would otherwise print as zero.
pub fn format_value(value: f64, decimals: usize) -> String {
    let threshold = 10f64.powi(-(decimals as i32));
    if value != 0.0 && value.abs() < threshold {
        format!("{:.*e}", decimals.max(3), value)
    } else {
        format!("{:.*}", decimals, value)
    }
}
