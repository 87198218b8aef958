//! Clipboard I/O for TUI actions.
//!
//! Failures become status messages rather than errors so the explorer keeps
//! running over SSH or in headless sessions where no clipboard exists.

use arboard::Clipboard;

/// Copy text to the system clipboard and describe what happened.
///
/// `description` fills the success message: "Copied {description} to clipboard".
pub fn copy_to_clipboard(text: &str, description: &str) -> String {
    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => format!("Copied {} to clipboard", description),
            Err(e) => {
                log::warn!("Clipboard write failed: {}", e);
                format!("Clipboard error: {}", e)
            }
        },
        Err(e) => {
            log::warn!("Clipboard unavailable: {}", e);
            format!("Clipboard not available: {}", e)
        }
    }
}
