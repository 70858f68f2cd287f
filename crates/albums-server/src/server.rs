use std::future::Future;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::shutdown;
use crate::state::AppState;

/// Album HTTP server.
pub struct AlbumServer {
    config: ServerConfig,
    state: AppState,
}

impl AlbumServer {
    /// Server whose store is seeded from `config.seed`.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::seeded(config.seed);
        Self { config, state }
    }

    /// Server over caller-supplied state.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Bind `config.bind_addr` and serve until shut down.
    ///
    /// With `graceful_shutdown` set, SIGINT/SIGTERM stop the listener and
    /// in-flight requests are drained; otherwise the server runs until the
    /// process is killed.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        if self.config.graceful_shutdown {
            self.run(listener, shutdown::signal()).await
        } else {
            self.run(listener, std::future::pending()).await
        }
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let albums = self.state.store.len()?;
        tracing::info!(%addr, seed = %self.config.seed, albums, "album server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        tracing::info!("album server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for AlbumServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlbumServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
