//! In-memory [`IndexSource`] fakes for loader tests.
//!
//! These skip the network entirely; the HTTP path has its own harness backed
//! by a real listener in `fake_site`.

use quickdex_core::SearchIndex;
use quickdex_fetch::{IndexSource, LoadError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Serves a canned payload and counts how many times it was fetched.
///
/// Grab the counter with [`StaticSource::counter`] before handing the source
/// to a loader; the loader takes ownership.
pub struct StaticSource {
    payload: String,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

impl IndexSource for StaticSource {
    async fn fetch(&self) -> Result<SearchIndex, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(SearchIndex::from_json_bytes(self.payload.as_bytes())?)
    }
}

/// Completes only after [`Notify::notify_one`] fires on the gate, which lets
/// tests observe the not-yet-ready window without real time.
pub struct GatedSource {
    payload: String,
    gate: Arc<Notify>,
}

impl GatedSource {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            gate: Arc::new(Notify::new()),
        }
    }

    pub fn gate(&self) -> Arc<Notify> {
        Arc::clone(&self.gate)
    }
}

impl IndexSource for GatedSource {
    async fn fetch(&self) -> Result<SearchIndex, LoadError> {
        self.gate.notified().await;
        Ok(SearchIndex::from_json_bytes(self.payload.as_bytes())?)
    }
}

/// Fails every fetch with a transport-level error.
pub struct FailingSource;

impl IndexSource for FailingSource {
    async fn fetch(&self) -> Result<SearchIndex, LoadError> {
        Err(LoadError::Status(500))
    }
}
