//! Server lifecycle: background listener, bounded-deadline shutdown
//!
//! The lifecycle is a one-way progression: bind and serve on a background
//! task, then on [`Server::shutdown`] stop accepting connections and wait up
//! to the deadline for in-flight requests to drain. There is no restart path.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A running HTTP server
///
/// Created by [`Server::start`]; consumed by [`Server::shutdown`].
pub struct Server {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    serve_task: JoinHandle<std::io::Result<()>>,
}

impl Server {
    /// Bind `addr` and start serving `app` on a background task.
    ///
    /// Returns as soon as the listener is bound; a bind failure (e.g. the
    /// address is already in use) is reported immediately and is not retried.
    pub async fn start(addr: &str, app: Router) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let serve_task = tokio::spawn(
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    // Also resolves if the Server handle is dropped without
                    // calling shutdown, so the task cannot outlive its owner.
                    let _ = shutdown_rx.await;
                })
                .into_future(),
        );

        info!("Server running on http://{}", local_addr);
        Ok(Self {
            local_addr,
            shutdown_tx,
            serve_task,
        })
    }

    /// The address the listener is actually bound to.
    ///
    /// Useful when starting on port 0 to get an ephemeral port.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting new connections and drain in-flight requests.
    ///
    /// Requests that finish within `deadline` complete normally. If the
    /// deadline elapses first, remaining connections are forcibly closed and
    /// an error is returned.
    pub async fn shutdown(self, deadline: Duration) -> anyhow::Result<()> {
        let _ = self.shutdown_tx.send(());

        let mut serve_task = self.serve_task;
        match tokio::time::timeout(deadline, &mut serve_task).await {
            Ok(joined) => {
                joined.context("server task panicked")??;
                info!("Server stopped gracefully");
                Ok(())
            }
            Err(_) => {
                serve_task.abort();
                warn!("Drain deadline elapsed, closing remaining connections");
                anyhow::bail!(
                    "server forced to shut down: in-flight requests did not finish within {:?}",
                    deadline
                )
            }
        }
    }
}
