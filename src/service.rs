// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Service lifecycle
//!
//! [`ServiceHost`] runs the HTTP server in a background task so the process
//! can be started and stopped by a service manager. Stopping broadcasts a
//! shutdown signal and waits for in-flight requests to drain.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::{config::Config, dnscmd::DnscmdExecutor, server, types::AppState};

/// How long `stop` waits for the server task to drain
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Service lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Server did not stop within {0:?}")]
    ShutdownTimeout(Duration),
}

/// A running HTTP server
pub struct ServiceHost {
    local_addr: SocketAddr,
    shutdown_tx: broadcast::Sender<()>,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ServiceHost {
    /// Bind the listener and start serving in the background
    ///
    /// Returns once the socket is bound; requests are handled on a spawned
    /// task until [`ServiceHost::stop`] is called.
    pub async fn start(config: &Config) -> Result<Self, ServiceError> {
        let addr = config.listen_addr();

        let state = AppState {
            dnscmd: Arc::new(DnscmdExecutor::new(Some(config.dnscmd.clone()))),
        };
        let app = server::build_router(state, config.writable);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServiceError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        let task = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
        });

        info!("windns api server listening on {}", local_addr);
        info!("swagger ui available at http://{}/docs", local_addr);

        Ok(Self {
            local_addr,
            shutdown_tx,
            task,
        })
    }

    /// Address the server is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal graceful shutdown and wait for the server task to finish
    pub async fn stop(self) -> Result<(), ServiceError> {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(()) {
            // The server task already exited
            warn!("Failed to send shutdown signal: {}", e);
        }

        match timeout(SHUTDOWN_TIMEOUT, self.task).await {
            Ok(Ok(Ok(()))) => {
                info!("Graceful shutdown completed");
                Ok(())
            }
            Ok(Ok(Err(e))) => {
                error!("Server exited with error: {}", e);
                Err(ServiceError::Serve(e))
            }
            Ok(Err(e)) => {
                error!("Server task panicked: {}", e);
                Err(ServiceError::Join(e))
            }
            Err(_) => {
                warn!("Server shutdown timed out");
                Err(ServiceError::ShutdownTimeout(SHUTDOWN_TIMEOUT))
            }
        }
    }

    /// Serve until Ctrl-C, then stop
    pub async fn run_until_signal(self) -> Result<(), ServiceError> {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
        self.stop().await
    }
}
