//! Read seam between the UI and whatever owns the index.

use std::sync::Arc;

use crate::index::SearchIndex;

/// Read-side handle to a lazily loaded search index.
///
/// The UI never blocks on the load. It kicks the load off (idempotently) and
/// peeks at the result each tick; `None` simply means "not yet".
pub trait IndexProvider: Send + Sync {
    /// Start the one-time load if it has not started. Synchronous and safe to
    /// call on every keystroke; only the first call does anything.
    fn ensure_started(&self);

    /// The finished index, or `None` while the load is still in flight or was
    /// never started. After the first `Some`, every call returns the same
    /// index for the life of the process.
    fn ready(&self) -> Option<Arc<SearchIndex>>;
}
