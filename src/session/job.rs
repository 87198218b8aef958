//! Background analysis jobs with latest-wins delivery.
//!
//! Each submission gets a fresh [`JobId`] and its own worker thread. Workers
//! never touch session state: they send a [`JobOutcome`] over a channel and
//! the owning thread decides, by id, whether the outcome may commit.
//! Superseded workers are not killed; their outcome is simply discarded.

use crate::analyzer::Analyzer;
use crate::core::errors::Error;
use crate::core::AnalysisReport;
use crate::report;
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Monotonically increasing request number.
pub type JobId = u64;

/// What a worker delivers back to the owning thread.
#[derive(Debug)]
pub struct JobOutcome {
    pub id: JobId,
    pub path: PathBuf,
    pub result: Result<AnalysisReport, String>,
}

/// Dispatches analyses to worker threads and collects their outcomes.
pub struct JobRunner {
    analyzer: Arc<dyn Analyzer>,
    latest: Option<JobId>,
    tx: Sender<JobOutcome>,
    rx: Receiver<JobOutcome>,
}

impl JobRunner {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        let (tx, rx) = channel::unbounded();
        Self {
            analyzer,
            latest: None,
            tx,
            rx,
        }
    }

    /// Id of the most recently issued job, if any.
    pub fn latest(&self) -> Option<JobId> {
        self.latest
    }

    /// Only the latest issued job may commit.
    pub fn is_current(&self, id: JobId) -> bool {
        self.latest == Some(id)
    }

    /// Start analyzing `path` in the background and return the new job's id.
    pub fn submit(&mut self, path: PathBuf) -> JobId {
        let id = self.latest.map_or(1, |last| last + 1);
        self.latest = Some(id);

        let analyzer = Arc::clone(&self.analyzer);
        let tx = self.tx.clone();
        let worker_path = path.clone();

        log::debug!("Issuing analysis job #{} for {}", id, path.display());

        let spawned = thread::Builder::new()
            .name(format!("lizard-job-{}", id))
            .spawn(move || {
                let result = run_job(analyzer.as_ref(), &worker_path);
                // The receiver only disappears when the session is gone.
                let _ = tx.send(JobOutcome {
                    id,
                    path: worker_path,
                    result,
                });
            });

        if let Err(e) = spawned {
            log::warn!("Failed to spawn analysis worker: {}", e);
            let message = Error::Worker(format!("failed to start analysis: {}", e)).to_string();
            let _ = self.tx.send(JobOutcome {
                id,
                path,
                result: Err(message),
            });
        }

        id
    }

    /// Next delivered outcome, without blocking.
    pub fn try_next(&self) -> Option<JobOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Next delivered outcome, waiting at most `timeout`.
    pub fn next_timeout(&self, timeout: Duration) -> Option<JobOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Analyze and parse on the worker thread. Panics are converted into an
/// error message so the session always hears back.
fn run_job(analyzer: &dyn Analyzer, path: &std::path::Path) -> Result<AnalysisReport, String> {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        analyzer
            .analyze(path)
            .map(|text| report::parse(&text))
            .map_err(|e| e.to_string())
    }));

    match attempt {
        Ok(result) => result,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(Error::Worker(format!("analysis panicked: {}", detail)).to_string())
        }
    }
}
