//! Search bar widget — the single-line query input at the top of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `ClearQuery` wipes the whole line.
//! - `CursorLeft` / `CursorRight` move the cursor one character.
//!
//! The bar is always focused; there is nowhere else for text to go.

use std::cell::Cell;

use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The query exactly as typed, untrimmed.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    /// Cached from the last render so clicks can be hit-tested.
    last_area: Cell<Rect>,
}

impl SearchBarState {
    /// Handle an editing event from the app shell.
    ///
    /// Returns `true` when the query text changed, so the shell knows to
    /// re-run the match. Cursor movement alone returns `false`.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.query.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                    true
                } else {
                    false
                }
            }
            AppEvent::ClearQuery => {
                let changed = !self.query.is_empty();
                self.query.clear();
                self.cursor = 0;
                if changed {
                    tracing::debug!("query: cleared");
                }
                changed
            }
            AppEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::CursorRight => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
                false
            }
            _ => false,
        }
    }

    /// True when the point lies inside the bar as last rendered.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.last_area.get().contains(Position::new(column, row))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.state.last_area.set(area);

        let block = Block::bordered()
            .title("Search")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.query.is_empty() {
            Line::from(Span::styled("type to search", self.theme.input_placeholder))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
