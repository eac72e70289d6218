//! One-shot query mode: match against the index and print hits to stdout.
//!
//! Output is one line per hit, `title<TAB>resolved-url`, in index order.
//! An index that fails to load behaves as an empty catalog: no hits, no
//! error, exit 0. This mirrors the interactive mode, where a failed load
//! degrades to an empty dropdown instead of an error screen.

use quickdex_fetch::{resolve_url, IndexLoader, IndexSource};
use tokio::runtime::Runtime;

pub fn run<S: IndexSource>(
    runtime: &Runtime,
    loader: &IndexLoader<S>,
    index_location: &str,
    query: &str,
) -> anyhow::Result<()> {
    // A blank query matches nothing; skip the fetch entirely.
    if query.trim().is_empty() {
        return Ok(());
    }

    let index = runtime.block_on(loader.load());
    if let Some(err) = loader.failure() {
        tracing::warn!(error = %err, "search index unavailable");
    }

    for entry in index.matches(query) {
        println!(
            "{}\t{}",
            entry.title,
            resolve_url(index_location, &entry.url)
        );
    }
    Ok(())
}
