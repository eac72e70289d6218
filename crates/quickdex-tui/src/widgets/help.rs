//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `F1`; close with `F1` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    _theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { _theme: theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(56, 13, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" quickdex — keybindings (F1 to close) ")
            .border_style(Style::default().add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        const BINDINGS: &[(&str, &str)] = &[
            ("any character", "Type into the search query"),
            ("Backspace", "Delete before the cursor"),
            ("Ctrl+u", "Clear the whole query"),
            ("← / →", "Move the text cursor"),
            ("↑ / ↓", "Move the result highlight"),
            ("Enter", "Open the highlighted result"),
            ("mouse click", "Open a result / dismiss the list"),
            ("Escape", "Close the dropdown, then quit"),
            ("F1", "Toggle this help popup"),
            ("Ctrl+c", "Quit"),
        ];

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<16}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
