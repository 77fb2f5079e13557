//! Squared error of Monte Carlo PageRank approximations.
//!
//! Four approximation methods were run with a number of walks equal to N times
//! the number of documents, for N in 10, 20, 50 and 100. The table holds the
//! squared error of each method against the exact PageRank of the top
//! documents, as measured for the assignment.

use serde::Serialize;

use crate::chart::{Chart, Series};

/// Walk-count multipliers (walks per document), in table row order.
pub const SAMPLE_RATIOS: [u32; 4] = [10, 20, 50, 100];

/// Rows follow [`SAMPLE_RATIOS`], columns follow [`Method::ALL`].
const SQUARED_ERRORS: [[f64; 4]; 4] = [
    [3.325235834469871E-7, 3.839930131314051E-7, 1.5872102153600365E-7, 1.9330643213247937E-7],
    [4.591073920335935E-7, 3.514709614248225E-7, 1.057230431137419E-7, 8.860240709738429E-8],
    [1.8937256475081407E-7, 1.1663707294243996E-7, 3.0167842302219667E-8, 3.254605591934964E-8],
    [5.191884370852313E-8, 4.727071960773765E-8, 1.7810894899410992E-8, 3.2631971093456564E-8],
];

/// Monte Carlo PageRank approximation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    EndPointRandomStart,
    EndPointCyclicStart,
    CompletePathStop,
    CompletePathStopRandomStart,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::EndPointRandomStart,
        Method::EndPointCyclicStart,
        Method::CompletePathStop,
        Method::CompletePathStopRandomStart,
    ];

    /// Method number as used in the course material.
    pub fn number(self) -> u8 {
        match self {
            Method::EndPointRandomStart => 1,
            Method::EndPointCyclicStart => 2,
            Method::CompletePathStop => 4,
            Method::CompletePathStopRandomStart => 5,
        }
    }

    pub fn label(self) -> String {
        let name = match self {
            Method::EndPointRandomStart => "End Point Random Start",
            Method::EndPointCyclicStart => "End Point Cyclic Start",
            Method::CompletePathStop => "Complete Path Stop",
            Method::CompletePathStopRandomStart => "Complete Path Stop Random Start",
        };
        format!("{} ({})", name, self.number())
    }

    fn column(self) -> usize {
        match self {
            Method::EndPointRandomStart => 0,
            Method::EndPointCyclicStart => 1,
            Method::CompletePathStop => 2,
            Method::CompletePathStopRandomStart => 3,
        }
    }
}

/// Measured squared errors, by method and sample ratio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredErrorTable;

impl SquaredErrorTable {
    pub fn measured() -> Self {
        Self
    }

    /// Squared error of `method` at sample ratio `ratio`, if it was measured.
    pub fn error(&self, method: Method, ratio: u32) -> Option<f64> {
        let row = SAMPLE_RATIOS.iter().position(|&n| n == ratio)?;
        Some(SQUARED_ERRORS[row][method.column()])
    }

    /// Method with the lowest error at `ratio`.
    pub fn best_method(&self, ratio: u32) -> Option<(Method, f64)> {
        Method::ALL
            .iter()
            .filter_map(|&m| self.error(m, ratio).map(|e| (m, e)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn series(&self, method: Method) -> Series {
        let points = SAMPLE_RATIOS
            .iter()
            .zip(SQUARED_ERRORS.iter())
            .map(|(&n, row)| (f64::from(n), row[method.column()]))
            .collect();
        Series::new(method.label(), points)
    }

    pub fn chart(&self) -> Chart {
        let mut chart = Chart::new(
            "Monte Carlo PageRank squared error",
            "Number of docs ratio",
            "Squared Error",
        );
        for method in Method::ALL {
            chart.push_series(self.series(method));
        }
        chart
    }
}
