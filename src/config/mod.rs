//! Configuration loaded from `.lizard-tui.toml`.
//!
//! The file is optional; command-line flags override whatever it sets.

mod core;
mod loader;

pub use self::core::{AnalyzerConfig, DisplayConfig, LizardTuiConfig};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME};
