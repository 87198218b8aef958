//! Path picking through `fzf`.
//!
//! The candidate list comes from `fd` when installed, otherwise `find`. The
//! TUI is suspended while fzf owns the terminal and resumed afterwards, the
//! same dance an external editor needs.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

/// What the user did in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(PathBuf),
    Cancelled,
}

pub fn fzf_available() -> bool {
    which::which("fzf").is_ok()
}

fn fd_available() -> bool {
    which::which("fd").is_ok()
}

/// Directory the search starts in: the input itself when it names a
/// directory, otherwise its parent, otherwise `.`; always absolute.
pub fn start_directory(current: &str) -> PathBuf {
    let current = Path::new(current);
    let dir = if current.is_dir() {
        current.to_path_buf()
    } else {
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };
    let absolute = std::path::absolute(&dir).unwrap_or(dir);
    normalize_path(&absolute)
}

/// Shell pipeline listing candidates into fzf.
pub fn finder_pipeline(use_fd: bool, dirs_only: bool) -> String {
    let list = match (use_fd, dirs_only) {
        (true, true) => "fd --type d",
        (true, false) => "fd --type d --type f",
        (false, true) => "find . -type d",
        (false, false) => r"find . \( -type f -o -type d \)",
    };
    let prompt = if dirs_only { "Folder: " } else { "Path: " };
    format!("{} 2>/dev/null | fzf --reverse --prompt='{}'", list, prompt)
}

/// Turn fzf's output into an absolute, normalized path.
pub fn resolve_selection(start_dir: &Path, output: &str) -> Option<PathBuf> {
    let selected = output.trim();
    if selected.is_empty() {
        return None;
    }
    let selected = Path::new(selected);
    let joined = if selected.is_absolute() {
        selected.to_path_buf()
    } else {
        start_dir.join(selected)
    };
    Some(normalize_path(&joined))
}

/// Lexically drop `.` segments and fold `..` into its parent.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Run fzf starting from the directory implied by `current`.
///
/// Suspends the TUI for the duration of the pick.
pub fn browse_with_fzf(current: &str, dirs_only: bool) -> Result<PickerOutcome> {
    let start_dir = start_directory(current);
    let pipeline = finder_pipeline(fd_available(), dirs_only);
    log::debug!("Running picker in {}: {}", start_dir.display(), pipeline);

    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(&pipeline)
        .current_dir(&start_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    suspend_terminal()?;
    let output = cmd.output();
    resume_terminal()?;

    let output = output.context("Failed to launch fzf")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(match resolve_selection(&start_dir, &stdout) {
        Some(path) => PickerOutcome::Selected(path),
        None => PickerOutcome::Cancelled,
    })
}

fn suspend_terminal() -> Result<()> {
    use crossterm::{
        cursor::MoveTo,
        execute,
        terminal::{disable_raw_mode, Clear, ClearType, LeaveAlternateScreen},
    };

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(std::io::stdout(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
        .context("Failed to clear screen")?;
    Ok(())
}

fn resume_terminal() -> Result<()> {
    use crossterm::{
        event, execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };

    execute!(std::io::stdout(), EnterAlternateScreen)
        .context("Failed to re-enter alternate screen")?;
    enable_raw_mode().context("Failed to re-enable raw mode")?;

    // Drop keys typed into fzf that crossterm still has queued.
    while event::poll(std::time::Duration::from_millis(0))? {
        let _ = event::read()?;
    }
    Ok(())
}
