//! Graceful shutdown sequencing.
//!
//! On the first signal the service reports draining on `/readyz` while still
//! accepting connections, so load balancers can take it out of rotation.
//! Only after the grace period does the returned future resolve and axum stop
//! accepting new connections and finish in-flight requests.

use std::future::Future;
use std::time::Duration;

use crate::app_state::AppState;

pub async fn drain_then_stop<F>(state: AppState, signal: F, grace: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;
    state.set_draining();
    tracing::info!(grace_ms = grace.as_millis() as u64, "shutdown signal received, draining");
    tokio::time::sleep(grace).await;
    tracing::info!("drain grace elapsed, closing listener");
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn os_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
}
