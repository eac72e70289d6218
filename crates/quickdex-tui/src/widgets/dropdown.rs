//! Results dropdown — the keyboard-navigable hit list under the search bar.
//!
//! # State machine
//!
//! | Phase    | Meaning                                              |
//! |----------|------------------------------------------------------|
//! | `Closed` | Nothing rendered                                     |
//! | `Empty`  | A search ran and found nothing; a notice names it    |
//! | `Open`   | Hit rows, at most one highlighted                    |
//!
//! A fresh result set always starts with no highlight; the arrows move it and
//! clamp at the ends without wrapping. Closing by any path (escape, empty
//! query, click-away, activation) discards the highlight.
//!
//! # Scroll semantics
//!
//! `scroll_offset` = first visible row. Moving the highlight outside the
//! viewport shifts the window just far enough to bring it back in; nothing
//! else moves the window.

use std::cell::Cell;

use crate::event::AppEvent;
use crate::theme::Theme;
use quickdex_core::SearchEntry;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

/// Visibility phase of the dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownPhase {
    #[default]
    Closed,
    Empty,
    Open,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Dropdown state. `hits` is non-empty exactly when the phase is `Open`.
#[derive(Debug, Default)]
pub struct DropdownState {
    phase: DropdownPhase,
    /// Trimmed query the current result set came from.
    query: String,
    hits: Vec<SearchEntry>,
    highlight: Option<usize>,
    /// First visible row when the hit list overflows the viewport.
    scroll_offset: usize,
    /// Outer widget area from the last render, for click hit-testing.
    last_area: Cell<Rect>,
    /// Row area from the last render: inside the borders, minus the
    /// scrollbar strip. Rows map 1:1 onto its lines.
    last_rows: Cell<Rect>,
}

impl DropdownState {
    pub fn phase(&self) -> DropdownPhase {
        self.phase
    }

    /// Open in either the `Empty` or `Open` sense; the widget is on screen.
    pub fn is_open(&self) -> bool {
        self.phase != DropdownPhase::Closed
    }

    pub fn hits(&self) -> &[SearchEntry] {
        &self.hits
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn highlighted_entry(&self) -> Option<&SearchEntry> {
        self.highlight.and_then(|i| self.hits.get(i))
    }

    /// Install a fresh result set. Every new set starts unhighlighted and
    /// scrolled to the top, even when it happens to equal the previous one.
    pub fn show(&mut self, query: &str, hits: Vec<SearchEntry>) {
        self.query = query.to_string();
        self.highlight = None;
        self.scroll_offset = 0;
        if hits.is_empty() {
            self.hits.clear();
            self.phase = DropdownPhase::Empty;
        } else {
            self.hits = hits;
            self.phase = DropdownPhase::Open;
        }
        tracing::debug!(query = %self.query, hits = self.hits.len(), "dropdown: results shown");
    }

    /// Close and discard all navigation state.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("dropdown: closed");
        }
        self.phase = DropdownPhase::Closed;
        self.hits.clear();
        self.highlight = None;
        self.scroll_offset = 0;
    }

    /// Handle a navigation event from the app shell. Everything else is
    /// ignored, as is navigation while there are no rows.
    pub fn handle(&mut self, event: &AppEvent) {
        if self.phase != DropdownPhase::Open {
            return;
        }
        match event {
            AppEvent::MoveDown => {
                let last = self.hits.len() - 1;
                self.highlight = Some(match self.highlight {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
                self.scroll_to_highlight();
                tracing::debug!(highlight = ?self.highlight, "dropdown: move down");
            }
            AppEvent::MoveUp => {
                self.highlight = Some(match self.highlight {
                    None => 0,
                    Some(i) => i.saturating_sub(1),
                });
                self.scroll_to_highlight();
                tracing::debug!(highlight = ?self.highlight, "dropdown: move up");
            }
            _ => {}
        }
    }

    /// Rows this dropdown wants on screen, borders included. Zero when closed.
    pub fn desired_height(&self, max_visible: u16) -> u16 {
        match self.phase {
            DropdownPhase::Closed => 0,
            DropdownPhase::Empty => 3,
            DropdownPhase::Open => (self.hits.len() as u16).min(max_visible) + 2,
        }
    }

    /// True when the point lies anywhere inside the dropdown as last
    /// rendered, chrome included.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.is_open() && self.last_area.get().contains(Position::new(column, row))
    }

    /// The absolute hit index under the point, if it is over a row.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.phase != DropdownPhase::Open {
            return None;
        }
        let rows = self.last_rows.get();
        if !rows.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.scroll_offset + (row - rows.y) as usize;
        (index < self.hits.len()).then_some(index)
    }

    fn viewport(&self) -> usize {
        (self.last_rows.get().height as usize).max(1)
    }

    fn scroll_to_highlight(&mut self) {
        let Some(i) = self.highlight else { return };
        let height = self.viewport();
        if i < self.scroll_offset {
            self.scroll_offset = i;
        } else if i >= self.scroll_offset + height {
            self.scroll_offset = i + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Dropdown<'a> {
    state: &'a DropdownState,
    theme: &'a Theme,
    show_categories: bool,
}

impl<'a> Dropdown<'a> {
    pub fn new(state: &'a DropdownState, theme: &'a Theme, show_categories: bool) -> Self {
        Self {
            state,
            theme,
            show_categories,
        }
    }
}

impl Widget for Dropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.state.phase {
            DropdownPhase::Closed => {}
            DropdownPhase::Empty => self.render_empty(area, buf),
            DropdownPhase::Open => self.render_rows(area, buf),
        }
    }
}

impl Dropdown<'_> {
    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        self.state.last_area.set(area);

        let block = Block::bordered()
            .title("Results")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);
        self.state.last_rows.set(Rect { height: 0, ..inner });

        let notice = Line::from(Span::styled(
            format!("no matches for '{}'", self.state.query),
            self.theme.no_matches,
        ));
        Paragraph::new(notice).render(inner, buf);
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        self.state.last_area.set(area);

        let block = Block::bordered()
            .title("Results")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        let total = self.state.hits.len();
        let overflow = total > height;

        // The scrollbar strip sits inside the borders; clicks on it must not
        // count as row clicks, so the cached row area excludes it.
        let rows_area = if overflow {
            Rect {
                width: inner.width.saturating_sub(1),
                ..inner
            }
        } else {
            inner
        };
        self.state.last_rows.set(rows_area);

        let start = self.state.scroll_offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.hits[start..end]
            .iter()
            .enumerate()
            .map(|(row, entry)| {
                let mut line = result_line(entry, &self.state.query, self.show_categories, self.theme);
                if Some(start + row) == self.state.highlight {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        Paragraph::new(lines).render(rows_area, buf);

        if overflow {
            let sb_area = Rect {
                x: inner.right().saturating_sub(1),
                width: 1,
                ..inner
            };
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn result_line(
    entry: &SearchEntry,
    query: &str,
    show_category: bool,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = title_spans(&entry.title, query, theme);
    if show_category {
        if let Some(category) = &entry.category {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                category.clone(),
                theme.category_style(category),
            ));
        }
    }
    Line::from(spans)
}

/// Emphasize the first occurrence of the query inside the title.
///
/// Offsets come from lowercased copies, which only line up with the original
/// bytes when both strings are pure ASCII; anything else renders without
/// emphasis rather than risking a mid-character slice.
fn title_spans(title: &str, query: &str, theme: &Theme) -> Vec<Span<'static>> {
    if title.is_ascii() && query.is_ascii() && !query.is_empty() {
        let haystack = title.to_ascii_lowercase();
        let needle = query.to_ascii_lowercase();
        if let Some(at) = haystack.find(&needle) {
            let end = at + needle.len();
            return vec![
                Span::styled(title[..at].to_string(), theme.result_title),
                Span::styled(title[at..end].to_string(), theme.match_emphasis),
                Span::styled(title[end..].to_string(), theme.result_title),
            ];
        }
    }
    vec![Span::styled(title.to_string(), theme.result_title)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
