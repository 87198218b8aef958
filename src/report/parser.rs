//! Line-oriented parser for lizard's verbose (`-V`) text report.
//!
//! The report is split into at most three sections, each opened by a header
//! line. Rows that don't fit their section's grammar are dropped; the parser
//! never fails and unrecognized input produces [`AnalysisReport::default`].

use crate::core::{AnalysisReport, FileMetric, FunctionMetric};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Column header that opens the function section.
pub const FUNCTION_HEADER: &str = "NLOC    CCN   token  PARAM  length  location";
/// Column header that opens the file section.
pub const FILE_HEADER: &str = "NLOC    Avg.NLOC  AvgCCN  Avg.token  function_cnt    file";
/// Phrase that opens the totals section.
pub const TOTALS_MARKER: &str = "Total nloc";
/// Banner lizard prints after the file section ("No thresholds exceeded", ...).
const THRESHOLDS_BANNER: &str = "thresholds exceeded";

static FUNCTION_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+([0-9]+)\s+(.+?)@([0-9]+)-([0-9]+)@(.+)$",
    )
    .expect("function row pattern is valid")
});

static FILE_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]+)\s+([0-9.]+)\s+([0-9.]+)\s+([0-9.]+)\s+([0-9]+)\s+(.+)$")
        .expect("file row pattern is valid")
});

static TOTALS_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]+)\s+([0-9.]+)\s+([0-9.]+)\s+([0-9.]+)\s+([0-9]+)\s+([0-9]+)")
        .expect("totals row pattern is valid")
});

/// Which section of the report the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Functions,
    Files,
    Totals,
}

/// How a single trimmed line affects the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Switches to a new section.
    Header(Section),
    /// Separator rules and blank lines.
    Noise,
    /// Threshold banner; closes the file section.
    ThresholdBanner,
    /// Candidate data row for the active section.
    Row,
}

fn classify(line: &str) -> LineKind {
    if line.contains(FUNCTION_HEADER) {
        LineKind::Header(Section::Functions)
    } else if line.contains(FILE_HEADER) {
        LineKind::Header(Section::Files)
    } else if line.contains(TOTALS_MARKER) {
        LineKind::Header(Section::Totals)
    } else if line.is_empty() || line.starts_with('=') || line.starts_with('-') {
        LineKind::Noise
    } else if line.contains(THRESHOLDS_BANNER) {
        LineKind::ThresholdBanner
    } else {
        LineKind::Row
    }
}

/// Totals line values, kept separate so a later line can replace them whole.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    total_nloc: u64,
    avg_nloc: f64,
    avg_ccn: f64,
    avg_token: f64,
    function_count: u64,
    warning_count: u64,
}

/// Parse lizard's text output into an [`AnalysisReport`].
///
/// Rows keep their source order. When several totals lines are present the
/// last parseable one wins.
pub fn parse(raw: &str) -> AnalysisReport {
    let mut functions = Vec::new();
    let mut files = Vec::new();
    let mut totals = Totals::default();
    let mut section = Section::None;

    for line in raw.split('\n').map(str::trim) {
        match classify(line) {
            LineKind::Header(next) => section = next,
            LineKind::Noise => {}
            LineKind::ThresholdBanner => {
                if section == Section::Files {
                    section = Section::None;
                }
            }
            LineKind::Row => match section {
                Section::Functions => functions.extend(parse_function_row(line)),
                Section::Files => files.extend(parse_file_row(line)),
                Section::Totals => {
                    if let Some(parsed) = parse_totals_row(line) {
                        totals = parsed;
                    }
                }
                Section::None => {}
            },
        }
    }

    log::debug!(
        "Parsed lizard report: {} functions, {} files",
        functions.len(),
        files.len()
    );

    AnalysisReport {
        functions,
        files,
        total_nloc: totals.total_nloc,
        avg_nloc: totals.avg_nloc,
        avg_ccn: totals.avg_ccn,
        avg_token: totals.avg_token,
        function_count: totals.function_count,
        warning_count: totals.warning_count,
    }
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

/// Parse `nloc ccn token param length name@start-end@path`.
pub(crate) fn parse_function_row(line: &str) -> Option<FunctionMetric> {
    let caps = FUNCTION_ROW.captures(line)?;
    Some(FunctionMetric {
        nloc: field(&caps, 1)?,
        ccn: field(&caps, 2)?,
        token_count: field(&caps, 3)?,
        param_count: field(&caps, 4)?,
        length: field(&caps, 5)?,
        name: caps.get(6)?.as_str().to_string(),
        start_line: field(&caps, 7)?,
        end_line: field(&caps, 8)?,
        file_path: caps.get(9)?.as_str().to_string(),
    })
}

/// Parse `nloc avg_nloc avg_ccn avg_token function_cnt path`.
pub(crate) fn parse_file_row(line: &str) -> Option<FileMetric> {
    let caps = FILE_ROW.captures(line)?;
    Some(FileMetric {
        nloc: field(&caps, 1)?,
        avg_nloc: field(&caps, 2)?,
        avg_ccn: field(&caps, 3)?,
        avg_token: field(&caps, 4)?,
        function_count: field(&caps, 5)?,
        file_path: caps.get(6)?.as_str().to_string(),
    })
}

fn parse_totals_row(line: &str) -> Option<Totals> {
    let caps = TOTALS_ROW.captures(line)?;
    Some(Totals {
        total_nloc: field(&caps, 1)?,
        avg_nloc: field(&caps, 2)?,
        avg_ccn: field(&caps, 3)?,
        avg_token: field(&caps, 4)?,
        function_count: field(&caps, 5)?,
        warning_count: field(&caps, 6)?,
    })
}
