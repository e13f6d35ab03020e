//! HTTP server command.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tracing::info;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::db::{self, SqliteSongStore};
use crate::enrichment::SongInfoClient;
use crate::error::ResultExt;

/// Open the store, bind the listener, and serve until Ctrl-C or SIGTERM.
///
/// The connection pool is closed after the server has drained.
pub fn cmd_serve(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    rt.block_on(async {
        let addr = config.bind_addr().with_context("reading bind address")?;

        let pool = db::init_db(&config.database.url, config.database.max_connections)
            .await
            .with_context(format!("opening database {}", config.database.url))?;
        info!("Connected to database {}", config.database.url);
        let store = Arc::new(SqliteSongStore::new(pool));

        let enrichment = Arc::new(
            SongInfoClient::new(&config.enrichment.base_url, config.enrichment.timeout())
                .with_context("building song info client")?,
        );
        info!("Using song info service at {}", config.enrichment.base_url);

        let listener = TcpListener::bind(addr)
            .await
            .with_context(format!("binding {}", addr))?;
        let state = AppState::new(store.clone(), enrichment);
        let result = api::serve(listener, state, shutdown_signal()).await;

        store.close().await;
        info!("Database connections closed");

        result?;
        Ok::<_, anyhow::Error>(())
    })
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, draining requests");
}
