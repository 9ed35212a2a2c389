//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;

use devops_demo_config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::ApiError;
use crate::http::routes::create_router;

/// The informational HTTP server.
pub struct InfoServer {
    config: ServerConfig,
}

impl InfoServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        self.config.addr()
    }

    /// Resolve and bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ApiError> {
        let addr = self.addr();
        let socket: SocketAddr = addr
            .parse()
            .map_err(|_| ApiError::InvalidAddress(addr.clone()))?;

        TcpListener::bind(socket)
            .await
            .map_err(|source| ApiError::Bind { addr, source })
    }

    /// Start the server and run until the process exits.
    pub async fn run(&self) -> Result<(), ApiError> {
        self.run_until(std::future::pending()).await
    }

    /// Start the server and drain connections once `shutdown` resolves.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<(), ApiError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        Self::serve(listener, shutdown).await
    }

    /// Serve on an already bound listener.
    pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), ApiError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?;
        info!("HTTP server listening on {}", local);

        axum::serve(listener, create_router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server on {} stopped", local);
        Ok(())
    }
}
