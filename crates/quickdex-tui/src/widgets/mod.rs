//! Ratatui widgets for the quickdex TUI.

pub mod dropdown;
pub mod help;
pub mod search_bar;
pub mod status_bar;
