//! HTTP API for the song catalog.
//!
//! Routes:
//! - `GET    /songs`      - list with `group`, `song`, `skip`, `limit`
//! - `POST   /songs`      - create, enriched from the song info service
//! - `DELETE /songs/{id}` - delete by ID
//! - `GET    /health`     - liveness probe
//!
//! Handlers receive their collaborators through [`AppState`]; nothing is
//! global.

mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;

use crate::db::SongStore;
use crate::enrichment::SongInfoApi;

pub use error::ApiError;

/// Collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SongStore>,
    pub enrichment: Arc<dyn SongInfoApi>,
}

impl AppState {
    pub fn new(store: Arc<dyn SongStore>, enrichment: Arc<dyn SongInfoApi>) -> Self {
        Self { store, enrichment }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/songs",
            get(handlers::list_songs).post(handlers::create_song),
        )
        .route("/songs/{id}", delete(handlers::delete_song))
        .route("/health", get(handlers::health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Starting server on {}...", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}
