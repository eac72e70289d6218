//! Fake site host for HTTP integration tests.
//!
//! Spins up a minimal `axum` server on a random TCP port bound to 127.0.0.1,
//! serving `GET /search-index.json` from a canned payload. Requests are
//! counted so fetch-once behavior is observable from outside the loader.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn demo() -> std::io::Result<()> {
//! use common::fake_site::FakeSite;
//!
//! let site = FakeSite::serve(r#"[]"#).await?;
//! // Point an HttpSource at site.index_url()
//! assert_eq!(site.hits(), 0);
//! # Ok(())
//! # }
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared between the router and test code.
struct SiteState {
    payload: String,
    status: StatusCode,
    hits: AtomicUsize,
}

/// Handle to the running fake site.
pub struct FakeSite {
    addr: SocketAddr,
    state: Arc<SiteState>,
}

impl FakeSite {
    /// Serve a payload with a 200 response. Returns once the port is bound.
    pub async fn serve(payload: &str) -> std::io::Result<Self> {
        Self::serve_with_status(payload, StatusCode::OK).await
    }

    /// Serve a payload with an arbitrary status code.
    pub async fn serve_with_status(payload: &str, status: StatusCode) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(SiteState {
            payload: payload.to_string(),
            status,
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/search-index.json", get(serve_index))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Absolute URL of the index document.
    pub fn index_url(&self) -> String {
        format!("http://{}/search-index.json", self.addr)
    }

    /// How many times the index has been requested so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn serve_index(State(state): State<Arc<SiteState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.status, state.payload.clone())
}
