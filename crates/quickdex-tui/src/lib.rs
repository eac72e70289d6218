//! quickdex TUI — ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{App, Opener};
