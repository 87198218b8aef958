//! Pure text formatting for TUI actions.
//!
//! Nothing here touches the clipboard or the terminal; the clipboard module
//! is the shell that ships these strings out.

use crate::core::FunctionMetric;

/// Header of the copied critical-functions block.
pub const CRITICAL_HEADER: &str = "CRITICAL FUNCTIONS (CCN > 15)";

/// Format critical functions for pasting into an issue or chat.
///
/// ```text
/// CRITICAL FUNCTIONS (CCN > 15)
/// ==================================================
///
/// CCN  22 | parse_args
///         | src/cli.c:10-80
///
/// ```
pub fn format_critical_report(functions: &[&FunctionMetric]) -> String {
    let mut lines = vec![CRITICAL_HEADER.to_string(), "=".repeat(50), String::new()];
    for f in functions {
        lines.push(format!("CCN {:3} | {}", f.ccn, f.name));
        lines.push(format!(
            "        | {}:{}-{}",
            f.file_path, f.start_line, f.end_line
        ));
        lines.push(String::new());
    }
    lines.join("\n")
}
