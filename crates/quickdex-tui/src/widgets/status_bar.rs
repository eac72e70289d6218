//! Status bar widget — the 1-line hint strip at the bottom of the screen.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Renders the program name at the left edge and keybinding hints at the
/// right edge of a single row.
pub struct StatusBar<'a> {
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_string(
            area.x,
            area.y,
            concat!(" quickdex ", env!("CARGO_PKG_VERSION")),
            self.theme.hint,
        );

        // Keybinding hints at the right edge
        let hint = " ↑↓:select  ↵:open  esc:close  F1:help  Ctrl+c:quit ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.hint);
    }
}
