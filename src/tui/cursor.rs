//! Row cursor for the result tables.
//!
//! Files and Functions each own a [`TableCursor`]. Whenever the displayed
//! rows change the cursor is clamped to the new row count, so a narrowing
//! filter never strands it past the last row.

use std::ops::Range;

/// Highlighted row plus the first row drawn in the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCursor {
    row: usize,
    top: usize,
}

impl TableCursor {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Jump to `row`, clamped to `0..rows`.
    pub fn select(&mut self, row: usize, rows: usize) {
        self.row = clamp_row(row, rows);
    }

    /// Move by `delta` rows, stopping at either end.
    pub fn step(&mut self, delta: isize, rows: usize) {
        let target = self.row.saturating_add_signed(delta);
        self.select(target, rows);
    }

    pub fn clamp(&mut self, rows: usize) {
        self.select(self.row, rows);
    }

    /// Scroll the least amount that keeps the highlighted row on screen.
    pub fn follow(&mut self, viewport: usize) {
        self.top = top_for_row(self.row, self.top, viewport);
    }

    /// Back to the first row, e.g. after a new report replaced the rows.
    pub fn rewind(&mut self) {
        *self = Self::default();
    }

    /// Rows to draw for a viewport of `viewport` rows.
    pub fn window(&self, viewport: usize, rows: usize) -> Range<usize> {
        visible_rows(self.top, viewport, rows)
    }
}

/// Last valid row for `rows`, or 0 when the table is empty.
pub fn clamp_row(row: usize, rows: usize) -> usize {
    row.min(rows.saturating_sub(1))
}

/// First visible row after scrolling `row` into a window starting at `top`.
pub fn top_for_row(row: usize, top: usize, viewport: usize) -> usize {
    match viewport {
        0 => row,
        _ if row < top => row,
        _ if row >= top + viewport => row + 1 - viewport,
        _ => top,
    }
}

pub fn visible_rows(top: usize, viewport: usize, rows: usize) -> Range<usize> {
    top.min(rows)..top.saturating_add(viewport).min(rows)
}
