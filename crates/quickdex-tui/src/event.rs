//! Semantic application events — crossterm input mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! The main event loop calls [`to_app_event`] on every
//! [`crossterm::event::Event`] and matches on the returned [`AppEvent`]
//! instead of crossterm types.
//!
//! # Keybindings
//!
//! There is no modal split: the search input always has focus, so every
//! printable character types into it and the vertical arrows belong to the
//! dropdown.
//!
//! | Key(s)            | Event                 |
//! |-------------------|-----------------------|
//! | `Ctrl+c`          | `Quit`                |
//! | printable char    | `Char(c)`             |
//! | `Backspace`       | `Backspace`           |
//! | `Ctrl+u`          | `ClearQuery`          |
//! | `←` / `→`         | `CursorLeft` / `CursorRight` |
//! | `↑` / `↓`         | `MoveUp` / `MoveDown` |
//! | `Enter`           | `Enter`               |
//! | `Escape`          | `Escape`              |
//! | `F1`              | `Help`                |
//! | left mouse press  | `Click{column, row}`  |
//! | terminal focus in | `FocusGained`         |
//! | terminal resize   | `Resize(w, h)`        |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The App shell routes each event to the search bar, the dropdown,
/// or itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// A printable character typed into the search input.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Wipe the whole query (readline-style Ctrl+u).
    ClearQuery,
    /// Move the text cursor left within the query.
    CursorLeft,
    /// Move the text cursor right within the query.
    CursorRight,
    /// Move the dropdown highlight up one row.
    MoveUp,
    /// Move the dropdown highlight down one row.
    MoveDown,
    /// Activate the highlighted result.
    Enter,
    /// Close the dropdown or the help popup; quit when nothing is open.
    Escape,
    /// Toggle the help popup.
    Help,
    /// Left mouse press at an absolute terminal cell.
    Click { column: u16, row: u16 },
    /// The terminal window regained focus.
    FocusGained,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse movement and scroll, focus loss, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::FocusGained => Some(AppEvent::FocusGained),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even mid-query
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ClearQuery),

        // Dropdown navigation
        Up => Some(AppEvent::MoveUp),
        Down => Some(AppEvent::MoveDown),

        // Text cursor movement
        Left => Some(AppEvent::CursorLeft),
        Right => Some(AppEvent::CursorRight),

        F(1) => Some(AppEvent::Help),

        // Text input — forward printable characters (including shifted ones,
        // e.g. uppercase letters) to the query
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
