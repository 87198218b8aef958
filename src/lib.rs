//! Terminal explorer for lizard code-complexity reports.
//!
//! The crate is split into a terminal-free engine and the TUI on top of it:
//!
//! - [`report`] parses lizard's verbose text output into an [`AnalysisReport`]
//! - [`view`] filters and sorts a report into table rows
//! - [`preview`] reads the source window behind a function row
//! - [`session`] runs analyses in the background and commits only the latest
//! - [`tui`] draws everything with ratatui and maps keys to session calls

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod core;
pub mod preview;
pub mod report;
pub mod session;
pub mod tui;
pub mod view;

// Re-export commonly used types
pub use crate::analyzer::{Analyzer, LizardAnalyzer};
pub use crate::core::errors::{Error, Result};
pub use crate::core::{AnalysisReport, ComplexityLevel, FileMetric, FunctionMetric};
pub use crate::preview::{extract_window, NumberedLine, PreviewError};
pub use crate::report::parse;
pub use crate::session::{CommitOutcome, JobId, Session};
pub use crate::view::{project, Projection, SortKey};
