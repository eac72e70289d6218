//! quickdex-core: the entry model, query normalization, and the substring
//! matcher shared by every other crate.
//!
//! Nothing here is async and nothing here does I/O beyond reading the config
//! file. The pipeline is small on purpose:
//!
//! ```text
//! raw JSON payload ──► SearchIndex::from_json_bytes ──► SearchIndex
//!                                                          │
//! query text ──► normalize ──► substring scan ◄────────────┘
//! ```
//!
//! Blobs are normalized once when an entry is built; queries are normalized
//! per match call. Both go through [`normalize()`], which is the only place
//! matching equivalences are defined.

pub mod config;
pub mod entry;
pub mod index;
pub mod normalize;
pub mod provider;

pub use entry::SearchEntry;
pub use index::{ParseError, SearchIndex, MAX_RESULTS};
pub use normalize::normalize;
pub use provider::IndexProvider;
