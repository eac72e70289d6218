//! quickdex-fetch: index source adapters and the load-once loader.
//!
//! [`IndexSource`] is the fetch seam: HTTP for deployed catalogs, a local
//! file for development. [`IndexLoader`] wraps a source with the process-wide
//! load-once lifecycle and exposes the read side as
//! [`quickdex_core::IndexProvider`].

pub mod loader;
pub mod source;

pub use loader::IndexLoader;
pub use source::{resolve_url, FileSource, HttpSource, IndexSource, LoadError};
