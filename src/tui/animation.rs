//! Frame counter for the loading spinner.

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animation controller for frame-based animations
#[derive(Debug, Default)]
pub struct AnimationController {
    frame: usize,
}

impl AnimationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next frame
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Braille spinner character for the current frame
    pub fn spinner_char(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}

/// Shorten a path for the loading box: keep the last 31 characters behind
/// an ellipsis once the path reaches 34 characters.
pub fn truncate_path(path: &str) -> String {
    let count = path.chars().count();
    if count < 34 {
        path.to_string()
    } else {
        let tail: String = path.chars().skip(count - 31).collect();
        format!("...{}", tail)
    }
}
