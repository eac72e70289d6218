//! quickdex — terminal quick-open for a site's search index.
//!
//! Fetches a site's `search-index.json` once, matches queries against it with
//! normalized substring containment, and opens the selected page in the
//! system browser.
//!
//! # Architecture
//!
//! ```text
//! IndexSource ──► IndexLoader ──► SearchIndex ──► TUI / headless
//!   (fetch)        (once-only)     (matching)      (render, open)
//! ```
//!
//! The TUI drives the main thread; the fetch runs on a small tokio runtime
//! and lands exactly once no matter how many times it is triggered.

pub mod headless;
pub mod opener;
