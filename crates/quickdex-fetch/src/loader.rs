//! The load-once index loader.
//!
//! Owns the "fetched at most once per process" lifecycle. The started flag
//! flips synchronously, before the spawned fetch gets a chance to run, so a
//! burst of triggers (focus, then a keystroke right behind it) cannot start a
//! second request. A failed fetch degrades to an empty index: the UI keeps
//! working, every query just misses, and the cause is logged and kept in
//! [`IndexLoader::failure`] rather than rendered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use quickdex_core::{IndexProvider, SearchIndex};
use tokio::sync::OnceCell;

use crate::source::{IndexSource, LoadError};

pub struct IndexLoader<S: IndexSource> {
    inner: Arc<Inner<S>>,
    runtime: tokio::runtime::Handle,
}

struct Inner<S> {
    source: S,
    started: AtomicBool,
    cell: OnceCell<Arc<SearchIndex>>,
    failure: OnceLock<LoadError>,
}

impl<S: IndexSource> IndexLoader<S> {
    pub fn new(source: S, runtime: tokio::runtime::Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                started: AtomicBool::new(false),
                cell: OnceCell::new(),
                failure: OnceLock::new(),
            }),
            runtime,
        }
    }

    /// Await the one-time load. Concurrent callers share a single fetch and
    /// get the same index back.
    pub async fn load(&self) -> Arc<SearchIndex> {
        self.inner.load().await
    }

    /// Why the load degraded to an empty index, if it did.
    pub fn failure(&self) -> Option<&LoadError> {
        self.inner.failure.get()
    }
}

impl<S: IndexSource> Inner<S> {
    async fn load(&self) -> Arc<SearchIndex> {
        self.cell
            .get_or_init(|| async {
                match self.source.fetch().await {
                    Ok(index) => {
                        tracing::debug!(entries = index.len(), "search index loaded");
                        Arc::new(index)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "search index load failed; continuing with an empty index");
                        let _ = self.failure.set(err);
                        Arc::new(SearchIndex::empty())
                    }
                }
            })
            .await
            .clone()
    }
}

impl<S: IndexSource> IndexProvider for IndexLoader<S> {
    fn ensure_started(&self) {
        // The flag flips in the same synchronous step that decides to spawn;
        // a second trigger arriving before the fetch resolves sees it set.
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }
        let inner = Arc::clone(&self.inner);
        self.runtime.spawn(async move {
            inner.load().await;
        });
    }

    fn ready(&self) -> Option<Arc<SearchIndex>> {
        self.inner.cell.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct CountingSource {
        payload: &'static str,
        fetches: Arc<AtomicUsize>,
    }

    impl IndexSource for CountingSource {
        async fn fetch(&self) -> Result<SearchIndex, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(SearchIndex::from_json_bytes(self.payload.as_bytes())?)
        }
    }

    struct FailingSource;

    impl IndexSource for FailingSource {
        async fn fetch(&self) -> Result<SearchIndex, LoadError> {
            Err(LoadError::Status(500))
        }
    }

    const PAYLOAD: &str = r#"[{"title": "BMI Calculator", "url": "/bmi"}]"#;

    #[tokio::test]
    async fn repeated_triggers_share_one_fetch() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            payload: PAYLOAD,
            fetches: Arc::clone(&fetches),
        };
        let loader = IndexLoader::new(source, tokio::runtime::Handle::current());

        for _ in 0..5 {
            loader.ensure_started();
        }
        let first = loader.load().await;
        let second = loader.load().await;

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[tokio::test]
    async fn failure_degrades_to_an_empty_index() {
        let loader = IndexLoader::new(FailingSource, tokio::runtime::Handle::current());
        let index = loader.load().await;

        assert!(index.is_empty());
        assert!(matches!(loader.failure(), Some(LoadError::Status(500))));
        assert!(loader.ready().is_some());
    }

    #[tokio::test]
    async fn ready_is_none_until_the_load_lands() {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            payload: PAYLOAD,
            fetches: Arc::clone(&fetches),
        };
        let loader = IndexLoader::new(source, tokio::runtime::Handle::current());

        assert!(loader.ready().is_none());
        let index = loader.load().await;
        let ready = loader.ready().unwrap();
        assert!(Arc::ptr_eq(&index, &ready));
    }
}
