use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::LizardTuiConfig;
use crate::view::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Cyclomatic complexity, highest first
    Ccn,
    /// Non-comment lines of code, largest first
    Nloc,
    /// Function name / file path, A-Z
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Ccn => SortKey::ByCcnDesc,
            SortArg::Nloc => SortKey::ByNlocDesc,
            SortArg::Name => SortKey::ByName,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lizard-tui")]
#[command(about = "Interactive terminal explorer for lizard complexity reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to analyze (analysis starts immediately unless it is ".")
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// lizard executable to run
    #[arg(long = "lizard", env = "LIZARD_TUI_LIZARD")]
    pub lizard: Option<String>,

    /// Initial sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Extra arguments passed to lizard after `--`
    #[arg(last = true)]
    pub lizard_args: Vec<String>,
}

/// Effective settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub path: PathBuf,
    pub program: String,
    pub extra_args: Vec<String>,
    pub sort_key: SortKey,
    pub critical_excludes: Vec<String>,
}

impl Cli {
    /// Merge with the file config; explicit flags win.
    pub fn resolve(self, config: LizardTuiConfig) -> Settings {
        let extra_args = if self.lizard_args.is_empty() {
            config.analyzer.extra_args
        } else {
            self.lizard_args
        };

        Settings {
            path: self.path,
            program: self.lizard.unwrap_or(config.analyzer.program),
            extra_args,
            sort_key: self
                .sort
                .map(SortKey::from)
                .unwrap_or(config.display.default_sort),
            critical_excludes: config.display.critical_excludes,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
