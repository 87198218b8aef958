//! TUI actions that leave the process: clipboard and the fzf picker.
//!
//! Pure formatting lives in `text_extraction`; `clipboard` and `picker` are
//! the imperative shell. The functions here compose the two and turn every
//! outcome into a status message.

pub mod clipboard;
pub mod picker;
pub mod text_extraction;

pub use clipboard::copy_to_clipboard;
pub use picker::{browse_with_fzf, fzf_available, PickerOutcome};
pub use text_extraction::format_critical_report;

use crate::core::{critical_functions, AnalysisReport};

/// Critical functions as a clipboard-ready block, or the status message
/// explaining why there is nothing to copy.
pub fn critical_report_text(
    report: Option<&AnalysisReport>,
    excludes: &[String],
) -> Result<(usize, String), &'static str> {
    let Some(report) = report.filter(|r| !r.functions.is_empty()) else {
        return Err("No data to copy");
    };

    let critical = critical_functions(&report.functions, excludes);
    if critical.is_empty() {
        return Err("No critical functions found (excluding tests)");
    }

    Ok((critical.len(), format_critical_report(&critical)))
}

/// Copy critical functions to the clipboard and return the status message.
pub fn copy_critical_functions(report: Option<&AnalysisReport>, excludes: &[String]) -> String {
    match critical_report_text(report, excludes) {
        Ok((count, text)) => {
            copy_to_clipboard(&text, &format!("{} critical functions", count))
        }
        Err(message) => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionMetric;

    fn function(name: &str, ccn: u32, path: &str) -> FunctionMetric {
        FunctionMetric {
            nloc: 30,
            ccn,
            token_count: 200,
            param_count: 1,
            length: 35,
            name: name.to_string(),
            start_line: 1,
            end_line: 35,
            file_path: path.to_string(),
        }
    }

    fn excludes() -> Vec<String> {
        vec!["test".to_string()]
    }

    #[test]
    fn test_no_report() {
        assert_eq!(critical_report_text(None, &excludes()), Err("No data to copy"));
        let empty = AnalysisReport::default();
        assert_eq!(
            critical_report_text(Some(&empty), &excludes()),
            Err("No data to copy")
        );
    }

    #[test]
    fn test_only_test_files_are_critical() {
        let report = AnalysisReport {
            functions: vec![
                function("big_case", 30, "tests/Test_parser.c"),
                function("small", 3, "src/parser.c"),
            ],
            ..Default::default()
        };
        assert_eq!(
            critical_report_text(Some(&report), &excludes()),
            Err("No critical functions found (excluding tests)")
        );
    }

    #[test]
    fn test_critical_sorted_descending() {
        let report = AnalysisReport {
            functions: vec![
                function("medium_bad", 16, "src/a.c"),
                function("fine", 15, "src/b.c"),
                function("worst", 40, "src/c.c"),
            ],
            ..Default::default()
        };
        let (count, text) = critical_report_text(Some(&report), &excludes()).unwrap();
        assert_eq!(count, 2);
        let worst = text.find("worst").unwrap();
        let medium = text.find("medium_bad").unwrap();
        assert!(worst < medium);
        assert!(!text.contains("fine"));
    }
}
