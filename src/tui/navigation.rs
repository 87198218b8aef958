//! Keyboard handling.
//!
//! `key_actions::determine_action` decides what a key means; this module
//! executes the result against the [`App`].

use super::actions::{self, PickerOutcome};
use super::app::App;
use super::input::TextInput;
use super::key_actions::{determine_action, Action, InputMode};
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Handle a key press. Returns `true` when the explorer should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    let Some(action) = determine_action(key, app.action_context()) else {
        return Ok(false);
    };
    execute_action(app, action)
}

/// Execute an action (imperative shell).
pub fn execute_action(app: &mut App, action: Action) -> Result<bool> {
    match action {
        Action::Quit => return Ok(true),

        Action::Refresh => app.refresh(),

        Action::Sort(key) => {
            app.session_mut().set_sort_key(key);
            app.sync_selection();
            app.set_status(key.status_message());
        }

        Action::NextTab => app.set_tab(app.tab().next()),

        Action::MoveUp => app.move_selection(-1),
        Action::MoveDown => app.move_selection(1),
        Action::PageUp => app.move_selection(-(app.page_size() as isize)),
        Action::PageDown => app.move_selection(app.page_size() as isize),
        Action::JumpToTop => app.select_index(0),
        Action::JumpToBottom => app.select_index(app.row_count().saturating_sub(1)),

        Action::ShowLegend => app.set_show_legend(true),
        Action::CloseLegend => app.set_show_legend(false),

        Action::CopyCritical => {
            let message =
                actions::copy_critical_functions(app.session().report(), app.critical_excludes());
            app.set_status(message);
        }

        Action::BrowseFolders => browse(app, true)?,
        Action::BrowseAll => browse(app, false)?,

        Action::FocusPath => {
            app.path_input_mut().move_end();
            app.set_mode(InputMode::Path);
        }
        Action::FocusFilter => {
            app.filter_input_mut().move_end();
            app.set_mode(InputMode::Filter);
        }

        Action::ClearFilter => {
            app.filter_input_mut().clear();
            apply_filter(app);
        }

        Action::InputChar(c) => edit_input(app, |input| {
            input.insert(c);
            true
        }),
        Action::InputBackspace => edit_input(app, |input| input.backspace()),
        Action::InputDelete => edit_input(app, |input| input.delete()),
        Action::InputLeft => edit_input(app, |input| {
            input.move_left();
            false
        }),
        Action::InputRight => edit_input(app, |input| {
            input.move_right();
            false
        }),
        Action::InputHome => edit_input(app, |input| {
            input.move_home();
            false
        }),
        Action::InputEnd => edit_input(app, |input| {
            input.move_end();
            false
        }),

        Action::InputSubmit => {
            if app.mode() == InputMode::Path {
                let path = app.path_input().value().trim().to_string();
                if path.is_empty() {
                    app.set_status("Enter a path to analyze");
                } else {
                    app.analyze(path);
                }
            }
            app.set_mode(InputMode::Normal);
        }

        Action::InputCancel => app.set_mode(InputMode::Normal),
    }

    Ok(false)
}

/// Apply `edit` to the focused input; `edit` reports whether the text changed.
fn edit_input(app: &mut App, edit: impl FnOnce(&mut TextInput) -> bool) {
    match app.mode() {
        InputMode::Path => {
            edit(app.path_input_mut());
        }
        InputMode::Filter => {
            if edit(app.filter_input_mut()) {
                apply_filter(app);
            }
        }
        InputMode::Normal => {}
    }
}

fn apply_filter(app: &mut App) {
    let text = app.filter_input().value().to_string();
    app.session_mut().set_filter_text(text);
    app.sync_selection();
}

fn browse(app: &mut App, dirs_only: bool) -> Result<()> {
    if !actions::fzf_available() {
        app.set_status("fzf not found in PATH");
        return Ok(());
    }

    let current = app.path_input().value().to_string();
    let outcome = actions::browse_with_fzf(&current, dirs_only);
    app.request_redraw();

    match outcome {
        Ok(PickerOutcome::Selected(path)) => {
            app.path_input_mut().set_value(path.to_string_lossy());
            app.analyze(path);
        }
        Ok(PickerOutcome::Cancelled) => {}
        Err(e) => app.set_status(format!("fzf error: {:#}", e)),
    }
    Ok(())
}
