//! System-browser activation for selected entries.

use quickdex_core::SearchEntry;
use quickdex_fetch::resolve_url;
use quickdex_tui::Opener;

/// Opens entries with the platform URL handler, resolving relative hrefs
/// against the index location first.
pub struct SystemOpener {
    index_location: String,
}

impl SystemOpener {
    pub fn new(index_location: impl Into<String>) -> Self {
        SystemOpener {
            index_location: index_location.into(),
        }
    }
}

impl Opener for SystemOpener {
    fn open(&self, entry: &SearchEntry) -> anyhow::Result<()> {
        let url = resolve_url(&self.index_location, &entry.url);
        open::that(&url)?;
        Ok(())
    }
}
