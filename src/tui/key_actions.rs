//! Pure action determination for keyboard handling.
//!
//! `determine_action` maps a key plus a small context to an [`Action`];
//! `navigation` executes it against the app. Keeping the mapping pure lets
//! every binding be tested without a terminal.

use crate::view::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,
    /// Editing the path to analyze.
    Path,
    /// Editing the function filter.
    Filter,
}

/// Everything a key can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Sort(SortKey),
    NextTab,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,
    ShowLegend,
    CloseLegend,
    CopyCritical,
    BrowseFolders,
    BrowseAll,
    FocusPath,
    FocusFilter,
    ClearFilter,

    // Text input editing
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,
    /// Enter inside an input.
    InputSubmit,
    /// Esc inside an input.
    InputCancel,
}

/// State needed to pick an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub mode: InputMode,
    pub legend_open: bool,
}

/// Pure function: determine which action a key triggers.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+Q always quits, whatever has focus.
    if ctrl && key.code == KeyCode::Char('q') {
        return Some(Action::Quit);
    }

    if ctx.legend_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseLegend),
            _ => None,
        };
    }

    match ctx.mode {
        InputMode::Normal => normal_action(key, ctrl),
        InputMode::Path | InputMode::Filter => input_action(key, ctrl),
    }
}

fn normal_action(key: KeyEvent, ctrl: bool) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('o') => Some(Action::BrowseFolders),
            KeyCode::Char('f') => Some(Action::BrowseAll),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('1') => Some(Action::Sort(SortKey::ByCcnDesc)),
        KeyCode::Char('2') => Some(Action::Sort(SortKey::ByNlocDesc)),
        KeyCode::Char('3') => Some(Action::Sort(SortKey::ByName)),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::NextTab),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::JumpToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::JumpToBottom),
        KeyCode::Char('?') => Some(Action::ShowLegend),
        KeyCode::Char('c') => Some(Action::CopyCritical),
        KeyCode::Char('/') | KeyCode::Char('f') => Some(Action::FocusFilter),
        KeyCode::Char('p') => Some(Action::FocusPath),
        KeyCode::Esc => Some(Action::ClearFilter),
        _ => None,
    }
}

fn input_action(key: KeyEvent, ctrl: bool) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('a') => Some(Action::InputHome),
            KeyCode::Char('e') => Some(Action::InputEnd),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Delete => Some(Action::InputDelete),
        KeyCode::Left => Some(Action::InputLeft),
        KeyCode::Right => Some(Action::InputRight),
        KeyCode::Home => Some(Action::InputHome),
        KeyCode::End => Some(Action::InputEnd),
        KeyCode::Enter => Some(Action::InputSubmit),
        KeyCode::Esc | KeyCode::Tab => Some(Action::InputCancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    const NORMAL: ActionContext = ActionContext {
        mode: InputMode::Normal,
        legend_open: false,
    };

    const FILTER: ActionContext = ActionContext {
        mode: InputMode::Filter,
        legend_open: false,
    };

    const LEGEND: ActionContext = ActionContext {
        mode: InputMode::Normal,
        legend_open: true,
    };

    #[test]
    fn test_sort_keys() {
        assert_eq!(
            determine_action(key(KeyCode::Char('1')), NORMAL),
            Some(Action::Sort(SortKey::ByCcnDesc))
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('2')), NORMAL),
            Some(Action::Sort(SortKey::ByNlocDesc))
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('3')), NORMAL),
            Some(Action::Sort(SortKey::ByName))
        );
    }

    #[test]
    fn test_ctrl_q_quits_everywhere() {
        assert_eq!(determine_action(ctrl('q'), NORMAL), Some(Action::Quit));
        assert_eq!(determine_action(ctrl('q'), FILTER), Some(Action::Quit));
        assert_eq!(determine_action(ctrl('q'), LEGEND), Some(Action::Quit));
    }

    #[test]
    fn test_typing_in_filter_is_text_not_commands() {
        assert_eq!(
            determine_action(key(KeyCode::Char('q')), FILTER),
            Some(Action::InputChar('q'))
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('1')), FILTER),
            Some(Action::InputChar('1'))
        );
        assert_eq!(
            determine_action(key(KeyCode::Enter), FILTER),
            Some(Action::InputSubmit)
        );
        assert_eq!(
            determine_action(key(KeyCode::Esc), FILTER),
            Some(Action::InputCancel)
        );
    }

    #[test]
    fn test_legend_swallows_other_keys() {
        assert_eq!(determine_action(key(KeyCode::Char('q')), LEGEND), None);
        assert_eq!(
            determine_action(key(KeyCode::Esc), LEGEND),
            Some(Action::CloseLegend)
        );
        assert_eq!(
            determine_action(key(KeyCode::Char('?')), LEGEND),
            Some(Action::CloseLegend)
        );
    }

    #[test]
    fn test_browse_shortcuts() {
        assert_eq!(determine_action(ctrl('o'), NORMAL), Some(Action::BrowseFolders));
        assert_eq!(determine_action(ctrl('f'), NORMAL), Some(Action::BrowseAll));
    }

    #[test]
    fn test_esc_clears_filter_in_normal_mode() {
        assert_eq!(
            determine_action(key(KeyCode::Esc), NORMAL),
            Some(Action::ClearFilter)
        );
    }
}
