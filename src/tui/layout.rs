//! Screen layout and the top-level render pass.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::app::{App, Tab};
use super::renderer;
use super::theme::Theme;

/// Width of the summary pane, borders included.
pub const SUMMARY_WIDTH: u16 = 28;

/// Rows the tables lose to the tab bar, the block borders and the header.
const TABLE_CHROME_ROWS: u16 = 4;

/// Vertical bands of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub path: Rect,
    pub filter: Rect,
    pub loading: Rect,
    pub content: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the terminal into input rows, content, status bar and footer.
pub fn calculate_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Path input
            Constraint::Length(3), // Filter input
            Constraint::Length(1), // Loading indicator
            Constraint::Min(0),    // Summary | tables | preview
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    AppLayout {
        path: chunks[0],
        filter: chunks[1],
        loading: chunks[2],
        content: chunks[3],
        status: chunks[4],
        footer: chunks[5],
    }
}

/// Horizontal split of the content row. The preview column only exists on
/// the Functions tab.
pub fn content_columns(content: Rect, tab: Tab) -> (Rect, Rect, Option<Rect>) {
    match tab {
        Tab::Files => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SUMMARY_WIDTH), Constraint::Fill(1)])
                .split(content);
            (chunks[0], chunks[1], None)
        }
        Tab::Functions => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SUMMARY_WIDTH),
                    Constraint::Fill(1),
                    Constraint::Fill(2),
                ])
                .split(content);
            (chunks[0], chunks[1], Some(chunks[2]))
        }
    }
}

/// Table body rows visible for a terminal of `height` rows.
pub fn table_viewport_height(height: u16) -> usize {
    let layout = calculate_layout(Rect::new(0, 0, 80, height));
    layout.content.height.saturating_sub(TABLE_CHROME_ROWS) as usize
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();
    let area = frame.area();
    let layout = calculate_layout(area);

    renderer::render_inputs(frame, app, &theme, layout.path, layout.filter);
    renderer::render_loading_line(frame, app, &theme, layout.loading);

    let (summary, tables, preview) = content_columns(layout.content, app.tab());
    renderer::render_summary(frame, app, &theme, summary);
    renderer::render_tables(frame, app, &theme, tables);
    if let Some(preview) = preview {
        renderer::render_preview(frame, app, &theme, preview);
    }

    renderer::render_status_bar(frame, app, &theme, layout.status);
    renderer::render_footer(frame, &theme, layout.footer);

    if app.session().is_loading() {
        renderer::render_loading_overlay(frame, app, &theme, layout.content);
    }
    if app.show_legend() {
        renderer::render_legend(frame, &theme, area);
    }
}
