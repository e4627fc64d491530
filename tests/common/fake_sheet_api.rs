//! Fake sheet endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /sheet` with whatever status and body the test
//! configured, optionally after a delay, and counts requests.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSheetApi::start().await.unwrap();
//! api.respond(200, CORPUS_SHEET).await;
//! let loader = SheetLoader::new(api.sheet_url(), Duration::from_secs(2)).unwrap();
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the next requests will receive.
struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

/// State shared between the router and test code.
struct ApiState {
    reply: Mutex<Reply>,
    hits: AtomicUsize,
}

/// Handle to the running fake sheet server.
pub struct FakeSheetApi {
    addr: SocketAddr,
    state: Arc<ApiState>,
}

impl FakeSheetApi {
    /// Start the server on a random port. Answers `200 []` until told
    /// otherwise.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ApiState {
            reply: Mutex::new(Reply {
                status: 200,
                body: "[]".to_string(),
                delay: Duration::ZERO,
            }),
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/sheet", get(serve_sheet))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the sheet endpoint.
    pub fn sheet_url(&self) -> String {
        format!("http://{}/sheet", self.addr)
    }

    /// Set the status and body for subsequent requests.
    pub async fn respond(&self, status: u16, body: &str) {
        let mut reply = self.state.reply.lock().await;
        reply.status = status;
        reply.body = body.to_string();
    }

    /// Delay every subsequent response by `delay`.
    pub async fn delay(&self, delay: Duration) {
        self.state.reply.lock().await.delay = delay;
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn serve_sheet(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body, delay) = {
        let reply = state.reply.lock().await;
        (reply.status, reply.body.clone(), reply.delay)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [("content-type", "application/json")], body)
}
