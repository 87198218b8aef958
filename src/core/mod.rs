//! Core data model for lizard complexity reports.
//!
//! Every type here is an immutable value produced by the report parser.
//! Display state (filtering, sorting) lives in [`crate::view`] and
//! [`crate::session`]; nothing in this module changes after construction.

pub mod errors;
pub mod metrics;

pub use metrics::{critical_functions, ComplexityDistribution};

/// Metrics for a single function as reported by lizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionMetric {
    pub nloc: u32,
    pub ccn: u32,
    pub token_count: u32,
    pub param_count: u32,
    pub length: u32,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub file_path: String,
}

impl FunctionMetric {
    /// Complexity band derived from the cyclomatic complexity number.
    pub fn complexity_level(&self) -> ComplexityLevel {
        ComplexityLevel::from_ccn(self.ccn)
    }

    /// `start-end` line span as shown in the functions table.
    pub fn line_span(&self) -> String {
        format!("{}-{}", self.start_line, self.end_line)
    }
}

/// Per-file averages from lizard's file section.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetric {
    pub nloc: u32,
    pub avg_nloc: f64,
    pub avg_ccn: f64,
    pub avg_token: f64,
    pub function_count: u32,
    pub file_path: String,
}

/// A complete parsed report.
///
/// `AnalysisReport::default()` is the empty report: no rows and all totals
/// zero. It stands for both "nothing analyzed yet" and "nothing parseable".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    pub functions: Vec<FunctionMetric>,
    pub files: Vec<FileMetric>,
    pub total_nloc: u64,
    pub avg_nloc: f64,
    pub avg_ccn: f64,
    pub avg_token: f64,
    pub function_count: u64,
    pub warning_count: u64,
}

impl AnalysisReport {
    /// True when the parser found no rows and no totals.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.files.is_empty() && self.total_nloc == 0
    }

    /// Count of functions per complexity band.
    pub fn distribution(&self) -> ComplexityDistribution {
        ComplexityDistribution::from_functions(&self.functions)
    }
}

/// Complexity band for a cyclomatic complexity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplexityLevel {
    /// CCN 1-5
    Low,
    /// CCN 6-10
    Medium,
    /// CCN 11-15
    High,
    /// CCN > 15
    Critical,
}

impl ComplexityLevel {
    pub fn from_ccn(ccn: u32) -> Self {
        match ccn {
            0..=5 => ComplexityLevel::Low,
            6..=10 => ComplexityLevel::Medium,
            11..=15 => ComplexityLevel::High,
            _ => ComplexityLevel::Critical,
        }
    }

    /// Band for a fractional average, using the same thresholds.
    pub fn from_average(avg_ccn: f64) -> Self {
        if avg_ccn <= 5.0 {
            ComplexityLevel::Low
        } else if avg_ccn <= 10.0 {
            ComplexityLevel::Medium
        } else if avg_ccn <= 15.0 {
            ComplexityLevel::High
        } else {
            ComplexityLevel::Critical
        }
    }

    /// CCN range covered by the band, for the legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "1-5",
            ComplexityLevel::Medium => "6-10",
            ComplexityLevel::High => "11-15",
            ComplexityLevel::Critical => ">15",
        }
    }

    pub fn all() -> &'static [ComplexityLevel] {
        &[
            ComplexityLevel::Low,
            ComplexityLevel::Medium,
            ComplexityLevel::High,
            ComplexityLevel::Critical,
        ]
    }
}
