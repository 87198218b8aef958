use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LizardTuiConfig;
use crate::core::errors::{Error, Result};

/// File name searched for in the current directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".lizard-tui.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<LizardTuiConfig> {
    toml::from_str::<LizardTuiConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LizardTuiConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest config at or above `start`, or defaults
pub fn load_config_from(start: &Path) -> LizardTuiConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LizardTuiConfig::default()
        })
}

/// Load config starting from the current directory
pub fn load_config() -> LizardTuiConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LizardTuiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::SortKey;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [analyzer]
            program = "/opt/bin/lizard"
            extra_args = ["-l", "python"]

            [display]
            default_sort = "nloc"
            critical_excludes = ["test", "vendor"]
            "#,
        )
        .unwrap();
        assert_eq!(config.analyzer.program, "/opt/bin/lizard");
        assert_eq!(config.analyzer.extra_args, vec!["-l", "python"]);
        assert_eq!(config.display.default_sort, SortKey::ByNlocDesc);
        assert_eq!(config.display.critical_excludes, vec!["test", "vendor"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, LizardTuiConfig::default());
        assert_eq!(config.analyzer.program, "lizard");
        assert_eq!(config.display.critical_excludes, vec!["test"]);
    }

    #[test]
    fn test_invalid_sort_is_error() {
        let err = parse_config("[display]\ndefault_sort = \"score\"").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_directory_ancestors() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
        assert_eq!(directory_ancestors(PathBuf::from("/a/b/c"), 2).count(), 2);
    }
}
