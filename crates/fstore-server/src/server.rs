use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use fstore_store::{DirectoryStore, FileService};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// fstore HTTP server.
pub struct FileServer {
    config: ServerConfig,
}

impl FileServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the upload directory and build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let backend = Arc::new(DirectoryStore::open(&self.config.upload_dir)?);
        let service = Arc::new(FileService::open(backend)?);
        Ok(build_router(service, self.config.max_upload_size))
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router()?;
        let addr: SocketAddr = listener.local_addr()?;
        tracing::info!(
            "fstore server listening on {} (files in {})",
            addr,
            self.config.upload_dir.display()
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
