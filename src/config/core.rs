use serde::{Deserialize, Serialize};

use crate::view::SortKey;

/// Root configuration structure, read from `.lizard-tui.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LizardTuiConfig {
    /// How the analyzer is invoked
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Display defaults
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Analyzer invocation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    /// Executable name or path
    #[serde(default = "default_program")]
    pub program: String,

    /// Extra arguments appended after `<path> -V`
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            extra_args: Vec::new(),
        }
    }
}

fn default_program() -> String {
    "lizard".to_string()
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Initial sort key ("ccn", "nloc" or "name")
    #[serde(default)]
    pub default_sort: SortKey,

    /// Path fragments skipped when copying critical functions
    #[serde(default = "default_critical_excludes")]
    pub critical_excludes: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            critical_excludes: default_critical_excludes(),
        }
    }
}

fn default_critical_excludes() -> Vec<String> {
    vec!["test".to_string()]
}
