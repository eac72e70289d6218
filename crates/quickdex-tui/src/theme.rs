//! Colour theme for the quickdex TUI.
//!
//! Themes are defined as TOML files. Both shipped themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] with the configured theme name at startup and
//! pass the result through the application as a shared reference.
//!
//! # Colour assignment for categories
//!
//! Category names are hashed to a stable index into the palette so the same
//! category always gets the same colour within a session, regardless of the
//! order results appear in.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResults {
    title: RawStyle,
    emphasis: RawStyle,
    no_matches: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawHints {
    text: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCategories {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    input: RawInput,
    results: RawResults,
    hints: RawHints,
    categories: RawCategories,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border style for the search bar (always focused).
    pub border_focused: Style,
    /// Border style for the dropdown.
    pub border_unfocused: Style,

    /// Placeholder text shown while the query is empty.
    pub input_placeholder: Style,

    /// Result row titles.
    pub result_title: Style,
    /// Inline emphasis on the matched span within a title.
    pub match_emphasis: Style,
    /// The "no matches" notice.
    pub no_matches: Style,

    /// Keybinding hints in the status bar.
    pub hint: Style,

    /// Ordered colour palette used for category colour cycling.
    category_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The default theme ships with
    /// the binary, so this should never happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a configured theme name to an embedded theme.
    ///
    /// Unknown names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be
    /// forward-compatible with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            input_placeholder: raw.input.placeholder.into_style(),
            result_title: raw.results.title.into_style(),
            match_emphasis: raw.results.emphasis.into_style(),
            no_matches: raw.results.no_matches.into_style(),
            hint: raw.hints.text.into_style(),
            category_palette: raw
                .categories
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Return a stable [`Style`] for a category name.
    ///
    /// The colour is determined by hashing the name and taking the result
    /// modulo the palette length, so the same category always maps to the
    /// same colour within a session.
    pub fn category_style(&self, category: &str) -> Style {
        if self.category_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(category) % self.category_palette.len();
        Style::default().fg(self.category_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Simple djb2-style hash that is stable across Rust versions and process
/// restarts, making category colour assignment deterministic.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        // Spot-check a few resolved styles.
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.match_emphasis, Style::default());
        assert_ne!(theme.no_matches, Style::default());
        assert!(!theme.category_palette.is_empty());
    }

    #[test]
    fn gruvbox_dark_theme_loads() {
        let theme = Theme::load_gruvbox_dark();
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.match_emphasis, Style::default());
        assert!(!theme.category_palette.is_empty());
    }

    #[test]
    fn by_name_accepts_spelling_variants() {
        for name in ["gruvbox", "gruvbox_dark", "Gruvbox-Dark"] {
            let theme = Theme::by_name(name);
            assert_eq!(theme.border_focused, Theme::load_gruvbox_dark().border_focused);
        }
    }

    #[test]
    fn by_name_falls_back_to_default() {
        let theme = Theme::by_name("solarized-nonexistent");
        assert_eq!(theme.border_focused, Theme::load_default().border_focused);
    }

    #[test]
    fn category_style_is_stable() {
        let theme = Theme::load_default();
        let a = theme.category_style("Finance");
        let b = theme.category_style("Finance");
        assert_eq!(a, b);
    }

    #[test]
    fn different_categories_can_differ() {
        let theme = Theme::load_default();
        // Not strictly guaranteed, but with 6 palette colours and distinct
        // names it is overwhelmingly likely.
        let styles: Vec<_> = ["Finance", "Health", "Math", "Fitness", "Other", "Dates"]
            .iter()
            .map(|n| theme.category_style(n))
            .collect();
        let unique: std::collections::HashSet<_> = styles.iter().collect();
        assert!(unique.len() > 1, "all categories mapped to the same colour");
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
