//! Interactive session state.
//!
//! The [`Session`] is the single source of truth for the current report,
//! filter text, sort key and loading flag. It is owned by the UI thread;
//! background jobs only reach it through [`Session::poll`], which commits
//! outcomes on the owning thread. After every change to the report, filter
//! or sort key the display projections are recomputed before returning.

pub mod job;

pub use job::{JobId, JobOutcome, JobRunner};

use crate::analyzer::Analyzer;
use crate::core::{AnalysisReport, FileMetric, FunctionMetric};
use crate::view::{project, SortKey};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Result of handing a job outcome to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The report was replaced.
    Committed {
        path: PathBuf,
        files: usize,
        functions: u64,
    },
    /// The job failed; the previous report is untouched.
    Failed { path: PathBuf, message: String },
    /// A newer job has been issued since; the outcome was discarded.
    Stale { id: JobId },
}

impl CommitOutcome {
    /// Status line for the consumer.
    pub fn status_message(&self) -> Option<String> {
        match self {
            CommitOutcome::Committed {
                files, functions, ..
            } => Some(format!("Analyzed {} files, {} functions", files, functions)),
            CommitOutcome::Failed { message, .. } => Some(format!("Error: {}", message)),
            CommitOutcome::Stale { .. } => None,
        }
    }
}

pub struct Session {
    report: Option<AnalysisReport>,
    filter_text: String,
    sort_key: SortKey,
    is_loading: bool,
    displayed_functions: Vec<FunctionMetric>,
    displayed_files: Vec<FileMetric>,
    last_path: Option<PathBuf>,
    jobs: JobRunner,
}

impl Session {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self::with_sort(analyzer, SortKey::default())
    }

    pub fn with_sort(analyzer: Arc<dyn Analyzer>, sort_key: SortKey) -> Self {
        Self {
            report: None,
            filter_text: String::new(),
            sort_key,
            is_loading: false,
            displayed_functions: Vec::new(),
            displayed_files: Vec::new(),
            last_path: None,
            jobs: JobRunner::new(analyzer),
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn displayed_functions(&self) -> &[FunctionMetric] {
        &self.displayed_functions
    }

    pub fn displayed_files(&self) -> &[FileMetric] {
        &self.displayed_files
    }

    /// Path of the most recent submission, used by refresh.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    // --- mutations -------------------------------------------------------

    /// Start analyzing `path`. Any job already running is superseded.
    pub fn submit(&mut self, path: impl Into<PathBuf>) -> JobId {
        let path = path.into();
        self.last_path = Some(path.clone());
        self.is_loading = true;
        self.jobs.submit(path)
    }

    /// Re-run the last submitted path, if there is one.
    pub fn refresh(&mut self) -> Option<JobId> {
        let path = self.last_path.clone()?;
        Some(self.submit(path))
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.recompute();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter_text(String::new());
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.recompute();
    }

    /// Apply a job outcome. Stale outcomes leave every field untouched.
    pub fn commit(&mut self, outcome: JobOutcome) -> CommitOutcome {
        if !self.jobs.is_current(outcome.id) {
            log::debug!(
                "Discarding stale job #{} (latest is {:?})",
                outcome.id,
                self.jobs.latest()
            );
            return CommitOutcome::Stale { id: outcome.id };
        }

        self.is_loading = false;
        match outcome.result {
            Ok(report) => {
                let files = report.files.len();
                let functions = report.function_count;
                log::info!(
                    "Committed job #{}: {} files, {} functions",
                    outcome.id,
                    files,
                    functions
                );
                self.report = Some(report);
                self.recompute();
                CommitOutcome::Committed {
                    path: outcome.path,
                    files,
                    functions,
                }
            }
            Err(message) => {
                log::warn!("Job #{} failed: {}", outcome.id, message);
                CommitOutcome::Failed {
                    path: outcome.path,
                    message,
                }
            }
        }
    }

    /// Commit every outcome delivered so far, without blocking.
    pub fn poll(&mut self) -> Vec<CommitOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.jobs.try_next() {
            outcomes.push(self.commit(outcome));
        }
        outcomes
    }

    /// Wait up to `timeout` for one outcome and commit it.
    pub fn poll_timeout(&mut self, timeout: Duration) -> Option<CommitOutcome> {
        let outcome = self.jobs.next_timeout(timeout)?;
        Some(self.commit(outcome))
    }

    fn recompute(&mut self) {
        let projection = match &self.report {
            Some(report) => project(report, &self.filter_text, self.sort_key),
            None => Default::default(),
        };
        self.displayed_functions = projection.functions;
        self.displayed_files = projection.files;
    }
}
