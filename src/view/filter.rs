//! Text filter for the functions table.

use crate::core::FunctionMetric;

/// Case-insensitive substring filter over function name and file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// An empty filter matches everything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check if a function matches this filter
    pub fn matches(&self, function: &FunctionMetric) -> bool {
        self.is_empty()
            || function.name.to_lowercase().contains(&self.needle)
            || function.file_path.to_lowercase().contains(&self.needle)
    }
}
