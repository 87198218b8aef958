//! Widget rendering for each screen region.
//!
//! Content that is worth testing without a terminal (summary, preview and
//! legend text) is built by pure `*_lines` functions; the `render_*`
//! functions only place widgets.

use std::path::Path;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use super::animation::truncate_path;
use super::app::{App, Tab};
use super::cursor::TableCursor;
use super::input::TextInput;
use super::key_actions::InputMode;
use super::layout::centered_rect;
use super::theme::Theme;
use crate::core::{AnalysisReport, ComplexityLevel, FileMetric, FunctionMetric};
use crate::preview::{NumberedLine, PreviewError};

/// Cells in a distribution bar.
const BAR_WIDTH: usize = 12;

// ============================================================================
// Inputs and status lines
// ============================================================================

pub fn render_inputs(frame: &mut Frame, app: &App, theme: &Theme, path: Rect, filter: Rect) {
    render_input(
        frame,
        theme,
        path,
        " Path ",
        "Enter path to analyze...",
        app.path_input(),
        app.mode() == InputMode::Path,
    );
    render_input(
        frame,
        theme,
        filter,
        " Filter ",
        "Filter functions by name or file...",
        app.filter_input(),
        app.mode() == InputMode::Filter,
    );
}

fn render_input(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    title: &str,
    placeholder: &str,
    input: &TextInput,
    focused: bool,
) {
    let text = if input.value().is_empty() && !focused {
        Line::styled(placeholder.to_string(), theme.label_style())
    } else {
        Line::styled(input.value().to_string(), theme.text_style())
    };

    let block = Block::bordered()
        .title(title.to_string())
        .border_style(theme.border_style(focused));
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused && area.width > 2 && area.height > 2 {
        let column = (input.cursor_column() as u16).min(area.width - 3);
        frame.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}

pub fn render_loading_line(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = if app.session().is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.spinner_char()),
                Style::default().fg(theme.warning()),
            ),
            Span::styled("Analyzing... Please wait", theme.text_style()),
        ])
    } else if app.session().report().is_none() {
        Line::styled(
            " Press Enter in the path field or r to start",
            theme.label_style(),
        )
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = Line::from(vec![
        Span::raw(format!(" {}", app.status())),
        Span::raw(format!(
            "  │ Sort: {}",
            app.session().sort_key().display_name()
        )),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(theme.status_bar_style()),
        area,
    );
}

const KEY_HINTS: [(&str, &str); 11] = [
    ("q", "Quit"),
    ("r", "Refresh"),
    ("^O", "Folders"),
    ("^F", "Files"),
    ("c", "Copy Crit"),
    ("1", "CCN"),
    ("2", "NLOC"),
    ("3", "Name"),
    ("/", "Filter"),
    ("Tab", "Switch"),
    ("?", "Legend"),
];

pub fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {}", key), theme.title_style()),
                Span::styled(format!(" {} ", label), theme.label_style()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Summary pane
// ============================================================================

pub fn render_summary(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::bordered()
        .title(Span::styled(" Summary ", theme.title_style()))
        .border_style(theme.border_style(true));
    let lines = summary_lines(app.session().report(), theme);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Summary pane text: totals, averages, warnings and the CCN distribution.
pub fn summary_lines(report: Option<&AnalysisReport>, theme: &Theme) -> Vec<Line<'static>> {
    let Some(report) = report else {
        return vec![Line::styled("No data", theme.label_style())];
    };

    let rule = Line::styled("─".repeat(24), theme.label_style());
    let mut lines = vec![
        Line::from(vec![
            Span::styled("NLOC ", theme.label_style()),
            Span::styled(format_number(report.total_nloc), theme.value_style()),
            Span::styled("  Funcs ", theme.label_style()),
            Span::styled(report.function_count.to_string(), theme.value_style()),
            Span::styled("  Files ", theme.label_style()),
            Span::styled(report.files.len().to_string(), theme.value_style()),
        ]),
        rule.clone(),
        Line::from(vec![
            Span::styled("Avg: ", theme.label_style()),
            Span::styled(format!("NLOC {:.0}", report.avg_nloc), theme.text_style()),
            Span::styled(" │ ", theme.label_style()),
            Span::styled(
                format!("CCN {:.1}", report.avg_ccn),
                theme.average_ccn_style(report.avg_ccn),
            ),
        ]),
    ];

    if report.warning_count > 0 {
        lines.push(Line::styled(
            format!("⚠ {} warnings", report.warning_count),
            Style::default()
                .fg(theme.error())
                .add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(rule);

    if !report.functions.is_empty() {
        let distribution = report.distribution();
        let total = distribution.total();
        for level in ComplexityLevel::all() {
            let count = distribution.count(*level);
            let color = Style::default().fg(theme.complexity_color(*level));
            lines.push(Line::from(vec![
                Span::styled(format!("{:<7}", short_label(*level)), theme.label_style()),
                Span::styled(distribution_bar(count, total), color),
                Span::styled(format!(" {}", count), color.add_modifier(Modifier::BOLD)),
            ]));
        }
    }

    lines
}

fn short_label(level: ComplexityLevel) -> &'static str {
    match level {
        ComplexityLevel::Low => "Low",
        ComplexityLevel::Medium => "Med",
        ComplexityLevel::High => "High",
        ComplexityLevel::Critical => "Crit",
    }
}

/// Fixed-width bar, filled in proportion to `count / total` (rounded down).
pub fn distribution_bar(count: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (count * BAR_WIDTH / total).min(BAR_WIDTH)
    };
    format!("{}{}", "█".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Format large numbers with thousand separators
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Tables
// ============================================================================

pub fn render_tables(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let tabs = Tabs::new(Tab::titles().to_vec())
        .select(app.tab().index())
        .style(theme.label_style())
        .highlight_style(theme.title_style().add_modifier(Modifier::UNDERLINED));
    frame.render_widget(tabs, chunks[0]);

    let block = Block::bordered().border_style(theme.border_style(app.mode() == InputMode::Normal));

    if app.session().report().is_none() {
        frame.render_widget(
            Paragraph::new(Line::styled("No data", theme.label_style())).block(block),
            chunks[1],
        );
        return;
    }

    let table = match app.tab() {
        Tab::Files => files_table(app, theme),
        Tab::Functions => functions_table(app, theme),
    };
    frame.render_widget(table.block(block), chunks[1]);
}

/// Rows inside the viewport, paired with whether each is selected.
fn visible<'a, T>(
    items: &'a [T],
    cursor: &TableCursor,
    viewport: usize,
) -> impl Iterator<Item = (bool, &'a T)> {
    let range = cursor.window(viewport, items.len());
    let selected = cursor.row();
    let start = range.start;
    items[range]
        .iter()
        .enumerate()
        .map(move |(i, item)| (start + i == selected, item))
}

fn functions_table<'a>(app: &'a App, theme: &Theme) -> Table<'a> {
    let rows: Vec<Row> = visible(
        app.session().displayed_functions(),
        app.functions_cursor(),
        app.viewport_height(),
    )
    .map(|(selected, f)| function_row(f, selected, theme))
    .collect();

    let header = Row::new(["CCN", "NLOC", "File", "Function", "Lines"])
        .style(theme.label_style().add_modifier(Modifier::BOLD));

    Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Fill(1),
            Constraint::Length(11),
        ],
    )
    .header(header)
}

fn function_row<'a>(f: &'a FunctionMetric, selected: bool, theme: &Theme) -> Row<'a> {
    let row = Row::new([
        Cell::from(Span::styled(
            f.ccn.to_string(),
            theme.complexity_style(f.complexity_level()),
        )),
        Cell::from(f.nloc.to_string()),
        Cell::from(file_name(&f.file_path)),
        Cell::from(f.name.as_str()),
        Cell::from(f.line_span()),
    ]);
    if selected {
        row.style(theme.selected_row_style())
    } else {
        row
    }
}

fn files_table<'a>(app: &'a App, theme: &Theme) -> Table<'a> {
    let rows: Vec<Row> = visible(
        app.session().displayed_files(),
        app.files_cursor(),
        app.viewport_height(),
    )
    .map(|(selected, f)| file_row(f, selected, theme))
    .collect();

    let header = Row::new(["NLOC", "Avg NLOC", "Avg CCN", "Avg Tokens", "Functions", "File"])
        .style(theme.label_style().add_modifier(Modifier::BOLD));

    Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(header)
}

fn file_row<'a>(f: &'a FileMetric, selected: bool, theme: &Theme) -> Row<'a> {
    let row = Row::new([
        Cell::from(f.nloc.to_string()),
        Cell::from(format!("{:.1}", f.avg_nloc)),
        Cell::from(Span::styled(
            format!("{:.1}", f.avg_ccn),
            theme.complexity_style(ComplexityLevel::from_average(f.avg_ccn)),
        )),
        Cell::from(format!("{:.1}", f.avg_token)),
        Cell::from(f.function_count.to_string()),
        Cell::from(file_name(&f.file_path)),
    ]);
    if selected {
        row.style(theme.selected_row_style())
    } else {
        row
    }
}

/// Last path component, or the whole path when there is none.
fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

// ============================================================================
// Code preview
// ============================================================================

pub fn render_preview(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::bordered()
        .title(Span::styled(" Preview ", theme.title_style()))
        .border_style(theme.border_style(false));

    let lines = match (app.selected_function(), app.preview()) {
        (Some(function), Some(preview)) => preview_lines(function, &preview.content, theme),
        _ => vec![Line::styled(
            "Select a function to preview code",
            theme.label_style(),
        )],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Header plus numbered source lines, or the read error.
pub fn preview_lines(
    function: &FunctionMetric,
    content: &Result<Vec<NumberedLine>, PreviewError>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let source = match content {
        Ok(lines) => lines,
        Err(e) => {
            return vec![Line::styled(
                format!("Cannot read file: {}", e),
                Style::default().fg(theme.error()),
            )]
        }
    };

    let mut lines = vec![
        Line::styled(file_name(&function.file_path), theme.title_style()),
        Line::styled(
            format!("{} (CCN: {})", function.name, function.ccn),
            theme.value_style(),
        ),
        Line::styled("─".repeat(40), theme.label_style()),
    ];
    lines.extend(source.iter().map(|line| {
        Line::from(vec![
            Span::styled(format!("{:4} ", line.number), theme.label_style()),
            Span::styled(line.text.clone(), theme.text_style()),
        ])
    }));
    lines
}

// ============================================================================
// Overlays
// ============================================================================

pub fn render_loading_overlay(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let path = app
        .session()
        .last_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lines = vec![
        Line::styled("Analyzing...", theme.title_style()),
        Line::styled(app.spinner_char(), Style::default().fg(theme.warning())),
        Line::default(),
        Line::styled(truncate_path(&path), theme.label_style()),
    ];

    let popup = centered_rect(40, 7, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(theme.border_style(true))),
        popup,
    );
}

pub fn render_legend(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered_rect(52, 24, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(legend_lines(theme))
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(Span::styled(" LEGEND ", theme.title_style()))
                    .title_bottom(Line::styled(" Press ESC or ? to close ", theme.label_style()))
                    .border_style(theme.border_style(true)),
            ),
        popup,
    );
}

const LEGEND_ENTRIES: [(&str, &str, &str); 5] = [
    (
        "CCN",
        "Cyclomatic Complexity Number",
        "Number of linearly independent paths through code. Lower is better.",
    ),
    (
        "NLOC",
        "Non-commenting Lines of Code",
        "Lines of code excluding comments and blank lines.",
    ),
    (
        "Tokens",
        "Token Count",
        "Number of tokens (keywords, operators, identifiers) in function.",
    ),
    (
        "Params",
        "Parameter Count",
        "Number of parameters the function accepts.",
    ),
    (
        "Length",
        "Function Length",
        "Total lines including comments and blanks.",
    ),
];

/// Acronym explanations followed by the complexity band table.
pub fn legend_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (acronym, full_name, description) in LEGEND_ENTRIES {
        lines.push(Line::from(vec![
            Span::styled(acronym, theme.title_style()),
            Span::styled(format!(" - {}", full_name), theme.value_style()),
        ]));
        lines.push(Line::styled(format!("  {}", description), theme.label_style()));
    }

    lines.push(Line::styled("─".repeat(46), theme.label_style()));
    lines.push(Line::styled("COMPLEXITY LEVELS", theme.value_style()));
    for level in ComplexityLevel::all() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<7}", short_label(*level)), theme.label_style()),
            Span::styled(
                format!("█ {:<6}", level.range_label()),
                Style::default().fg(theme.complexity_color(*level)),
            ),
            Span::styled(level_hint(*level), theme.label_style()),
        ]));
    }
    lines
}

fn level_hint(level: ComplexityLevel) -> &'static str {
    match level {
        ComplexityLevel::Low => "Simple, easy to test",
        ComplexityLevel::Medium => "Moderate complexity",
        ComplexityLevel::High => "Consider refactoring",
        ComplexityLevel::Critical => "Hard to test/maintain",
    }
}
