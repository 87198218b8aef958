// Shared fixtures for lizard-tui integration tests
#![allow(dead_code)]

use crossbeam::channel::{self, Receiver, Sender};
use lizard_tui::core::errors::{Error, Result};
use lizard_tui::Analyzer;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Verbose lizard output for a small two-file project.
pub const SAMPLE_REPORT: &str = indoc::indoc! {"
    ================================================
      NLOC    CCN   token  PARAM  length  location
    ------------------------------------------------
          10      3     45      2      12 foo@5-16@src/a.py
          42     19    310      4      55 Parser::parse_expr@20-80@src/parser.cpp
           4      1     12      0       4 tiny@90-93@src/parser.cpp
    2 file analyzed.
    ==============================================================
    NLOC    Avg.NLOC  AvgCCN  Avg.token  function_cnt    file
    --------------------------------------------------------------
         120       8.5     4.2       30.1         6     src/a.py
         300      23.0    10.0      161.0         2     src/parser.cpp

    ===========================================================================================================
    No thresholds exceeded (cyclomatic_complexity > 15 or length > 1000 or nloc > 1000000 or parameter_count > 100)
    ==========================================================================================
    Total nloc   Avg.NLOC  AvgCCN  Avg.token   Fun Cnt  Warning cnt   Fun Rt   nloc Rt
    ------------------------------------------------------------------------------------------
           420      18.7     7.7      122.3        3            1      0.33    0.10
"};

/// Analyzer whose calls block until the test releases them, so tests decide
/// the order in which jobs finish.
pub struct GatedAnalyzer {
    gates: HashMap<PathBuf, Receiver<Result<String>>>,
}

/// Sending side used to release one gated path.
pub struct Gate(Sender<Result<String>>);

impl Gate {
    pub fn release(&self, text: &str) {
        self.0.send(Ok(text.to_string())).expect("analyzer still waiting");
    }

    pub fn fail(&self, message: &str) {
        self.0
            .send(Err(Error::analyzer_failed("gated", message)))
            .expect("analyzer still waiting");
    }
}

impl GatedAnalyzer {
    pub fn new(paths: &[&str]) -> (Self, Vec<Gate>) {
        let mut gates = HashMap::new();
        let mut senders = Vec::new();
        for path in paths {
            let (tx, rx) = channel::bounded(1);
            gates.insert(PathBuf::from(path), rx);
            senders.push(Gate(tx));
        }
        (Self { gates }, senders)
    }
}

impl Analyzer for GatedAnalyzer {
    fn analyze(&self, path: &Path) -> Result<String> {
        match self.gates.get(path) {
            Some(gate) => gate
                .recv()
                .unwrap_or_else(|_| Err(Error::Worker("gate dropped".to_string()))),
            None => Ok(String::new()),
        }
    }
}
