//! Configuration types for quickdex.
//!
//! [`Config::load`] reads `~/.config/quickdex/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[index]
url = ""

[ui]
max_visible     = 8
show_categories = true
theme           = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from
/// `~/.config/quickdex/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[index]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexConfig {
    /// Where `search-index.json` lives: an http(s) URL or a local file path.
    /// Empty means unconfigured; the binary then requires `--index`.
    #[serde(default)]
    pub url: String,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Dropdown rows shown at once; longer hit lists scroll.
    #[serde(default = "default_max_visible")]
    pub max_visible: u16,
    #[serde(default = "default_show_categories")]
    pub show_categories: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_max_visible() -> u16 { 8 }
fn default_show_categories() -> bool { true }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            show_categories: default_show_categories(),
            theme: default_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/quickdex/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("quickdex")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
