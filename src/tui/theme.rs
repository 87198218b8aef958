//! Color themes and styling for TUI components.

use crate::core::ComplexityLevel;
use ratatui::style::{Color, Modifier, Style};

/// Orange used for the "high" complexity band.
const ORANGE: Color = Color::Rgb(255, 136, 0);

/// Color scheme for lizard-tui
pub struct Theme {
    /// Primary accent color (cyan for borders, titles and active elements)
    pub primary: Color,
    /// Success color (green for low complexity)
    pub success: Color,
    /// Muted color (dark gray for labels and rules)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    pub fn error(&self) -> Color {
        Color::Red
    }

    /// Foreground color for a complexity band
    pub fn complexity_color(&self, level: ComplexityLevel) -> Color {
        match level {
            ComplexityLevel::Low => self.success,
            ComplexityLevel::Medium => self.warning(),
            ComplexityLevel::High => ORANGE,
            ComplexityLevel::Critical => self.error(),
        }
    }

    /// Style for CCN cells; critical values are also bold
    pub fn complexity_style(&self, level: ComplexityLevel) -> Style {
        let style = Style::default().fg(self.complexity_color(level));
        if level == ComplexityLevel::Critical {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for the summary's average CCN (three colors only)
    pub fn average_ccn_style(&self, avg_ccn: f64) -> Style {
        let color = if avg_ccn <= 5.0 {
            self.success
        } else if avg_ccn <= 10.0 {
            self.warning()
        } else {
            self.error()
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn selected_row_style(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.primary).fg(Color::Black)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
