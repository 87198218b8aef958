//! Application state for the interactive explorer.
//!
//! `App` wraps the [`Session`] with everything that exists only on screen:
//! input fields, the active tab, per-table selection, the legend overlay,
//! the status line and the cached code preview. Rendering reads it through
//! shared references; `navigation` is the only place that mutates it in
//! response to keys.

use super::animation::AnimationController;
use super::cursor::TableCursor;
use super::input::TextInput;
use super::key_actions::{ActionContext, InputMode};
use crate::core::FunctionMetric;
use crate::preview::{extract_window, NumberedLine, PreviewError};
use crate::session::{CommitOutcome, Session};
use std::path::PathBuf;

/// The two result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Files,
    Functions,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Files => Tab::Functions,
            Tab::Functions => Tab::Files,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Files => 0,
            Tab::Functions => 1,
        }
    }

    pub fn titles() -> [&'static str; 2] {
        ["Files", "Functions"]
    }
}

/// Source window for the function the cursor is on.
#[derive(Debug)]
pub struct Preview {
    key: (String, usize, usize),
    pub content: Result<Vec<NumberedLine>, PreviewError>,
}

pub struct App {
    session: Session,
    critical_excludes: Vec<String>,
    path_input: TextInput,
    filter_input: TextInput,
    mode: InputMode,
    tab: Tab,
    files_cursor: TableCursor,
    functions_cursor: TableCursor,
    show_legend: bool,
    status: String,
    preview: Option<Preview>,
    animation: AnimationController,
    viewport_height: usize,
    needs_redraw: bool,
}

impl App {
    pub fn new(session: Session, initial_path: &str, critical_excludes: Vec<String>) -> Self {
        Self {
            session,
            critical_excludes,
            path_input: TextInput::new(initial_path),
            filter_input: TextInput::default(),
            mode: InputMode::Normal,
            tab: Tab::default(),
            files_cursor: TableCursor::default(),
            functions_cursor: TableCursor::default(),
            show_legend: false,
            status: "Ready".to_string(),
            preview: None,
            animation: AnimationController::new(),
            viewport_height: 0,
            needs_redraw: false,
        }
    }

    /// Kick off the first analysis unless the path is the bare default.
    pub fn analyze_initial_path(&mut self) {
        let path = self.path_input.value().trim().to_string();
        if !path.is_empty() && path != "." {
            self.analyze(path);
        }
    }

    /// Submit `path` for analysis; a running job is superseded.
    pub fn analyze(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::info!("Analysis requested for {}", path.display());
        self.session.submit(path);
    }

    /// Re-run the path currently in the input, or the last submitted one.
    pub fn refresh(&mut self) {
        let path = self.path_input.value().trim().to_string();
        if !path.is_empty() {
            self.analyze(path);
        } else if self.session.refresh().is_none() {
            self.set_status("Enter a path to analyze");
        }
    }

    /// Drain finished jobs and advance the spinner. Called once per frame.
    pub fn tick(&mut self) {
        if self.session.is_loading() {
            self.animation.tick();
        }

        for outcome in self.session.poll() {
            if let Some(message) = outcome.status_message() {
                self.set_status(message);
            }
            if let CommitOutcome::Committed { .. } = outcome {
                self.files_cursor.rewind();
                self.functions_cursor.rewind();
                // Source may have changed since the last analysis.
                self.preview = None;
            }
        }

        self.sync_selection();
    }

    // --- accessors -------------------------------------------------------

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn critical_excludes(&self) -> &[String] {
        &self.critical_excludes
    }

    pub fn path_input(&self) -> &TextInput {
        &self.path_input
    }

    pub fn path_input_mut(&mut self) -> &mut TextInput {
        &mut self.path_input
    }

    pub fn filter_input(&self) -> &TextInput {
        &self.filter_input
    }

    pub fn filter_input_mut(&mut self) -> &mut TextInput {
        &mut self.filter_input
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.sync_selection();
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    pub fn set_show_legend(&mut self, show: bool) {
        self.show_legend = show;
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    pub fn spinner_char(&self) -> &'static str {
        self.animation.spinner_char()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn action_context(&self) -> ActionContext {
        ActionContext {
            mode: self.mode,
            legend_open: self.show_legend,
        }
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        if self.viewport_height != height {
            self.viewport_height = height;
            self.sync_selection();
        }
    }

    /// Request a full terminal clear before the next draw.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // --- selection -------------------------------------------------------

    pub fn files_cursor(&self) -> &TableCursor {
        &self.files_cursor
    }

    pub fn functions_cursor(&self) -> &TableCursor {
        &self.functions_cursor
    }

    /// Rows in the visible table.
    pub fn row_count(&self) -> usize {
        match self.tab {
            Tab::Files => self.session.displayed_files().len(),
            Tab::Functions => self.session.displayed_functions().len(),
        }
    }

    pub fn selected_function(&self) -> Option<&FunctionMetric> {
        self.session
            .displayed_functions()
            .get(self.functions_cursor.row())
    }

    /// Move the cursor of the visible table by `delta` rows.
    pub fn move_selection(&mut self, delta: isize) {
        let count = self.row_count();
        match self.tab {
            Tab::Files => self.files_cursor.step(delta, count),
            Tab::Functions => self.functions_cursor.step(delta, count),
        }
        self.sync_selection();
    }

    pub fn select_index(&mut self, index: usize) {
        let count = self.row_count();
        match self.tab {
            Tab::Files => self.files_cursor.select(index, count),
            Tab::Functions => self.functions_cursor.select(index, count),
        }
        self.sync_selection();
    }

    /// Rows moved by PgUp/PgDn.
    pub fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    /// Re-clamp both cursors after the projection changed, keep the
    /// selection scrolled into view, and reload the preview if the
    /// highlighted function moved.
    pub fn sync_selection(&mut self) {
        let files = self.session.displayed_files().len();
        let functions = self.session.displayed_functions().len();
        let viewport = self.viewport_height;

        self.files_cursor.clamp(files);
        self.files_cursor.follow(viewport);
        self.functions_cursor.clamp(functions);
        self.functions_cursor.follow(viewport);

        self.sync_preview();
    }

    fn sync_preview(&mut self) {
        if self.tab != Tab::Functions {
            return;
        }

        let Some(function) = self.selected_function() else {
            self.preview = None;
            return;
        };

        let key = (
            function.file_path.clone(),
            function.start_line,
            function.end_line,
        );
        if self.preview.as_ref().is_some_and(|p| p.key == key) {
            return;
        }

        let content = extract_window(&key.0, key.1, key.2);
        if let Err(e) = &content {
            log::debug!("Preview unavailable: {}", e);
        }
        self.preview = Some(Preview { key, content });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::core::errors::Result;
    use std::io::Write;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    struct Fixed(String);

    impl Analyzer for Fixed {
        fn analyze(&self, _path: &Path) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    fn report_text(source: &str) -> String {
        [
            "================================================".to_string(),
            "  NLOC    CCN   token  PARAM  length  location  ".to_string(),
            "------------------------------------------------".to_string(),
            format!("       3      1     10      0       3 short@1-3@{source}"),
            format!("      12     20     90      2      14 tangled@5-16@{source}"),
            "1 file analyzed.".to_string(),
            "==============================================================".to_string(),
            "NLOC    Avg.NLOC  AvgCCN  Avg.token  function_cnt    file".to_string(),
            "--------------------------------------------------------------".to_string(),
            format!("     15       7.5    10.5       50.0         2     {source}"),
            String::new(),
            "No thresholds exceeded (cyclomatic_complexity > 15)".to_string(),
            "Total nloc   Avg.NLOC  AvgCCN  Avg.token   Fun Cnt  Warning cnt   Fun Rt   nloc Rt"
                .to_string(),
            "        15       7.5    10.5       50.0        2            0      0.00    0.00"
                .to_string(),
        ]
        .join("\n")
    }

    fn app_with(text: String) -> App {
        let session = Session::new(Arc::new(Fixed(text)));
        App::new(session, "src", vec!["test".to_string()])
    }

    fn wait_for_report(app: &mut App) {
        for _ in 0..200 {
            app.tick();
            if app.session().report().is_some() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("analysis never completed");
    }

    #[test]
    fn test_initial_path_dot_does_not_analyze() {
        let session = Session::new(Arc::new(Fixed(String::new())));
        let mut app = App::new(session, ".", Vec::new());
        app.analyze_initial_path();
        assert!(!app.session().is_loading());
    }

    #[test]
    fn test_commit_sets_status_and_resets_selection() {
        let mut app = app_with(report_text("a.c"));
        app.analyze_initial_path();
        assert!(app.session().is_loading());
        wait_for_report(&mut app);

        assert_eq!(app.status(), "Analyzed 1 files, 2 functions");
        assert_eq!(app.files_cursor().row(), 0);
        assert!(!app.session().is_loading());
    }

    #[test]
    fn test_tab_switch_loads_preview() {
        let mut source = tempfile::NamedTempFile::new().unwrap();
        for i in 1..=20 {
            writeln!(source, "line {}", i).unwrap();
        }
        let path = source.path().to_string_lossy().to_string();

        let mut app = app_with(report_text(&path));
        app.analyze("src");
        wait_for_report(&mut app);
        assert!(app.preview().is_none());

        app.set_tab(Tab::Functions);
        let preview = app.preview().expect("preview loaded");
        let lines = preview.content.as_ref().unwrap();
        // Sorted by CCN descending, so the 5-16 function is first.
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].number, 5);
        assert_eq!(lines[0].text, "line 5");
    }

    #[test]
    fn test_selection_clamped_when_filter_shrinks() {
        let mut app = app_with(report_text("a.c"));
        app.analyze("src");
        wait_for_report(&mut app);
        app.set_tab(Tab::Functions);
        app.select_index(1);
        assert_eq!(app.functions_cursor().row(), 1);

        app.session_mut().set_filter_text("tangled");
        app.sync_selection();
        assert_eq!(app.functions_cursor().row(), 0);
        assert_eq!(app.selected_function().map(|f| f.name.as_str()), Some("tangled"));
    }

    #[test]
    fn test_refresh_with_empty_input_and_no_history() {
        let session = Session::new(Arc::new(Fixed(String::new())));
        let mut app = App::new(session, "", Vec::new());
        app.refresh();
        assert_eq!(app.status(), "Enter a path to analyze");
        assert!(!app.session().is_loading());
    }

    #[test]
    fn test_take_needs_redraw_resets() {
        let mut app = app_with(String::new());
        app.request_redraw();
        assert!(app.take_needs_redraw());
        assert!(!app.take_needs_redraw());
    }
}
