//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{Config, ServerState};
use crate::routes::build_app;
use crate::utils::{AppError, AppResult, ErrorCode};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind the configured port and serve until Ctrl-C
    pub async fn run(&self) -> AppResult<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            AppError::with_message(ErrorCode::NetworkError, format!("Failed to bind {addr}: {e}"))
        })?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> AppResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = build_app().with_state(self.state.clone());

        let local = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Listener has no address: {e}")))?;
        tracing::info!(
            addr = %local,
            backend = self.state.orders.backend(),
            "Order server listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::internal(format!("HTTP server failed: {e}")))?;

        tracing::info!("Order server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
