//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable host/port
//! and to stop it gracefully on Ctrl-C.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{self, AppState};

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance with the given configuration
    ///
    /// # Errors
    /// Fails if the engine settings in `config` are invalid.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let state = AppState::new(config.clone()).context("invalid engine settings")?;
        let router = routes::build_router(state);

        Ok(Self { config, router })
    }

    /// Get the socket address the server will bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = self.config.socket_addr();
        addr.parse()
            .with_context(|| format!("invalid socket address {}", addr))
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        let timeout = Duration::from_secs(self.config.shutdown_timeout_secs);
        self.run_with_listener(listener, shutdown_signal(timeout)).await
    }

    /// Run the server on an existing listener until `shutdown` completes
    ///
    /// This is useful for testing where you want to use a listener bound to port 0
    /// to get a random available port.
    pub async fn run_with_listener<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")?;

        tracing::info!("server stopped");
        Ok(())
    }

    /// Create a test server and return the bound address
    ///
    /// This binds to port 0 to get a random available port, starts the server
    /// in a background task, and returns the actual bound address.
    #[cfg(test)]
    pub async fn spawn_test_server(
        config: ServerConfig,
    ) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = Self::new(config).unwrap();
        let handle = tokio::spawn(async move {
            server
                .run_with_listener(listener, std::future::pending())
                .await
                .ok();
        });

        (addr, handle)
    }
}

/// Resolves on Ctrl-C, then arms a hard-exit timer for in-flight requests.
async fn shutdown_signal(timeout: Duration) {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!(timeout_secs = timeout.as_secs(), "shutdown signal received");
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!("graceful shutdown timed out");
        std::process::exit(1);
    });
}
