//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal (raw mode, alternate screen, mouse and
//! focus capture), drives the crossterm event loop, and tears everything down
//! cleanly on exit or panic.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        dropdown::{Dropdown, DropdownState},
        help::HelpPopup,
        search_bar::{SearchBar, SearchBarState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{
        self as ct_event, DisableFocusChange, DisableMouseCapture, EnableFocusChange,
        EnableMouseCapture, Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quickdex_core::{config::Config, IndexProvider, SearchEntry};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, sync::Arc, time::Duration};

/// Where an activated entry gets sent.
///
/// The TUI's one outward side effect, kept behind a trait so tests can record
/// activations instead of launching a browser.
pub trait Opener: Send {
    fn open(&self, entry: &SearchEntry) -> anyhow::Result<()>;
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub search: SearchBarState,
    pub dropdown: DropdownState,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
    /// Trimmed text of the previous match run, checked to skip redundant
    /// re-renders. `None` after startup, an empty query, or a clear.
    last_query: Option<String>,
    /// Set once the loader's not-ready → ready transition has been observed.
    index_seen: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    index: Arc<dyn IndexProvider>,
    opener: Box<dyn Opener>,
}

impl App {
    pub fn new(
        config: Config,
        theme: Theme,
        index: Arc<dyn IndexProvider>,
        opener: Box<dyn Opener>,
    ) -> Self {
        App {
            state: AppState {
                search: SearchBarState::default(),
                dropdown: DropdownState::default(),
                theme,
                config,
                show_help: false,
                quit: false,
                last_query: None,
                index_seen: false,
            },
            index,
            opener,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.poll_index();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) => {
                        if key.kind == crossterm::event::KeyEventKind::Press {
                            if let Some(ev) = event::to_app_event(Event::Key(key)) {
                                tracing::debug!(event = ?ev, "key event");
                                self.handle(ev);
                            }
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Observe the loader's not-ready → ready transition.
    ///
    /// A query typed while the index was still loading recorded itself in the
    /// guard but rendered nothing; re-running it once, with the guard
    /// bypassed, makes the dropdown reflect the real catalog.
    fn poll_index(&mut self) {
        if self.state.index_seen {
            return;
        }
        if self.index.ready().is_some() {
            self.state.index_seen = true;
            tracing::debug!("search index ready");
            self.refresh_results(true);
        }
    }

    fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.state.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape => {
                    tracing::debug!("help popup closed");
                    self.state.show_help = false;
                }
                AppEvent::Quit => self.state.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.state.quit = true;
            }

            AppEvent::Help => {
                tracing::debug!("help popup opened");
                self.state.show_help = true;
            }

            // Close the dropdown if it is open; otherwise quit.
            AppEvent::Escape => {
                if self.state.dropdown.is_open() {
                    self.state.dropdown.close();
                } else {
                    tracing::debug!("quit (escape)");
                    self.state.quit = true;
                }
            }

            AppEvent::Enter => {
                if let Some(entry) = self.state.dropdown.highlighted_entry().cloned() {
                    self.activate(&entry);
                }
            }

            AppEvent::MoveUp | AppEvent::MoveDown => {
                self.state.dropdown.handle(&event);
            }

            AppEvent::Click { column, row } => self.click(column, row),

            // Warm the index when focus returns, ahead of the first keystroke.
            AppEvent::FocusGained => {
                self.index.ensure_started();
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            AppEvent::Char(_) | AppEvent::Backspace | AppEvent::ClearQuery => {
                self.index.ensure_started();
                if self.state.search.handle(&event) {
                    self.refresh_results(false);
                }
            }

            AppEvent::CursorLeft | AppEvent::CursorRight => {
                self.state.search.handle(&event);
            }
        }
    }

    /// Re-run the match for the current query. `force` bypasses the
    /// redundant-query guard (used on the index-ready transition).
    fn refresh_results(&mut self, force: bool) {
        let trimmed = self.state.search.query.trim();

        if trimmed.is_empty() {
            // Empty after trim: hide everything and reset the tracker so the
            // next real query always runs.
            self.state.last_query = None;
            self.state.dropdown.close();
            return;
        }

        if !force && self.state.last_query.as_deref() == Some(trimmed) {
            return;
        }
        let trimmed = trimmed.to_string();
        self.state.last_query = Some(trimmed.clone());

        let Some(index) = self.index.ready() else {
            // Still loading; poll_index() re-runs this once it lands.
            return;
        };

        let hits: Vec<SearchEntry> = index
            .matches(&self.state.search.query)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(query = %trimmed, hits = hits.len(), "match");
        self.state.dropdown.show(&trimmed, hits);
    }

    fn activate(&mut self, entry: &SearchEntry) {
        // Closing is the first observable effect, before navigation runs.
        self.state.dropdown.close();
        tracing::debug!(title = %entry.title, url = %entry.url, "open");
        if let Err(err) = self.opener.open(entry) {
            tracing::warn!(error = %err, title = %entry.title, "failed to open entry");
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        if let Some(hit) = self.state.dropdown.row_at(column, row) {
            if let Some(entry) = self.state.dropdown.hits().get(hit).cloned() {
                self.activate(&entry);
            }
            return;
        }
        // Inside either widget's chrome is a no-op; anywhere else dismisses.
        if self.state.dropdown.contains(column, row) || self.state.search.contains(column, row) {
            return;
        }
        self.state.dropdown.close();
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line search bar | dropdown (when open) | spacer | hints
    let dropdown_height = state.dropdown.desired_height(state.config.ui.max_visible);
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(dropdown_height),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(SearchBar::new(&state.search, &state.theme), vert[0]);
    if state.dropdown.is_open() {
        frame.render_widget(
            Dropdown::new(
                &state.dropdown,
                &state.theme,
                state.config.ui.show_categories,
            ),
            vert[1],
        );
    }
    frame.render_widget(StatusBar::new(&state.theme), vert[3]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return; // the popup owns the screen; leave the cursor hidden
    }

    let bar = SearchBar::new(&state.search, &state.theme);
    let (cx, cy) = bar.cursor_position(vert[0]);
    frame.set_cursor_position((cx, cy));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
