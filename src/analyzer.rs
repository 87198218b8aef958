//! Invocation of the external `lizard` analyzer.
//!
//! The [`Analyzer`] trait is the seam between the session engine and the
//! process world; tests substitute an in-memory implementation.

use crate::core::errors::{Error, Result};
use std::io;
use std::path::Path;
use std::process::Command;

/// Produces raw report text for a path.
pub trait Analyzer: Send + Sync {
    /// Run the analysis and return combined stdout and stderr.
    fn analyze(&self, path: &Path) -> Result<String>;
}

/// Runs `<program> <path> -V <extra args...>`.
#[derive(Debug, Clone)]
pub struct LizardAnalyzer {
    program: String,
    extra_args: Vec<String>,
}

impl Default for LizardAnalyzer {
    fn default() -> Self {
        Self::new("lizard", Vec::new())
    }
}

impl LizardAnalyzer {
    pub fn new(program: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            extra_args,
        }
    }

    /// Whether the analyzer binary resolves on PATH.
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(path).arg("-V").args(&self.extra_args);
        cmd
    }
}

impl Analyzer for LizardAnalyzer {
    fn analyze(&self, path: &Path) -> Result<String> {
        log::info!("Running {} on {}", self.program, path.display());

        let output = self.command(path).output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                Error::analyzer_unavailable(&self.program, "executable not found in PATH")
            }
            _ => Error::analyzer_failed(path, e.to_string()),
        })?;

        // lizard exits non-zero when warnings exceed thresholds; the report
        // is still complete, so the status is only logged.
        if !output.status.success() {
            log::debug!("{} exited with {}", self.program, output.status);
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}
