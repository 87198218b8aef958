//! Display projections derived from a report.
//!
//! [`project`] is a pure function of `(report, filter text, sort key)`. The
//! session calls it after every change to one of those inputs, so the tables
//! never show a stale combination.

pub mod filter;
pub mod sort;

pub use filter::TextFilter;
pub use sort::{sort_files, sort_functions, SortKey};

use crate::core::{AnalysisReport, FileMetric, FunctionMetric};

/// Ordered rows for the two tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub functions: Vec<FunctionMetric>,
    pub files: Vec<FileMetric>,
}

/// Filter and sort a report for display.
///
/// Only functions are filtered; the files table always lists every file.
pub fn project(report: &AnalysisReport, filter_text: &str, sort_key: SortKey) -> Projection {
    let filter = TextFilter::new(filter_text);

    let mut functions: Vec<FunctionMetric> = report
        .functions
        .iter()
        .filter(|f| filter.matches(f))
        .cloned()
        .collect();
    sort_functions(&mut functions, sort_key);

    let mut files = report.files.clone();
    sort_files(&mut files, sort_key);

    Projection { functions, files }
}
