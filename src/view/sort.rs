//! Sort functionality for the function and file tables.

use crate::core::{FileMetric, FunctionMetric};
use serde::{Deserialize, Serialize};

/// Sort key shared by both tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Functions by CCN, files by average CCN (descending)
    #[default]
    #[serde(rename = "ccn")]
    ByCcnDesc,
    /// Both tables by NLOC (descending)
    #[serde(rename = "nloc")]
    ByNlocDesc,
    /// Functions by name, files by path (case-insensitive A-Z)
    #[serde(rename = "name")]
    ByName,
}

impl SortKey {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::ByCcnDesc => "CCN",
            SortKey::ByNlocDesc => "NLOC",
            SortKey::ByName => "Name",
        }
    }

    /// Status line shown after switching to this key
    pub fn status_message(&self) -> &'static str {
        match self {
            SortKey::ByCcnDesc => "Sorted by Cyclomatic Complexity (descending)",
            SortKey::ByNlocDesc => "Sorted by NLOC (descending)",
            SortKey::ByName => "Sorted by name",
        }
    }

    /// Get all sort keys
    pub fn all() -> &'static [SortKey] {
        &[SortKey::ByCcnDesc, SortKey::ByNlocDesc, SortKey::ByName]
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ccn" | "byccndesc" => Ok(SortKey::ByCcnDesc),
            "nloc" | "bynlocdesc" => Ok(SortKey::ByNlocDesc),
            "name" | "byname" => Ok(SortKey::ByName),
            other => Err(format!(
                "unknown sort key '{}' (expected ccn, nloc or name)",
                other
            )),
        }
    }
}

/// Stable in-place sort of functions. Equal keys keep their prior order.
pub fn sort_functions(functions: &mut [FunctionMetric], key: SortKey) {
    match key {
        SortKey::ByCcnDesc => functions.sort_by(|a, b| b.ccn.cmp(&a.ccn)),
        SortKey::ByNlocDesc => functions.sort_by(|a, b| b.nloc.cmp(&a.nloc)),
        SortKey::ByName => functions.sort_by_cached_key(|f| f.name.to_lowercase()),
    }
}

/// Stable in-place sort of files. Equal keys keep their prior order.
pub fn sort_files(files: &mut [FileMetric], key: SortKey) {
    match key {
        SortKey::ByCcnDesc => files.sort_by(|a, b| b.avg_ccn.total_cmp(&a.avg_ccn)),
        SortKey::ByNlocDesc => files.sort_by(|a, b| b.nloc.cmp(&a.nloc)),
        SortKey::ByName => files.sort_by_cached_key(|f| f.file_path.to_lowercase()),
    }
}
