//! Revenue Agent service.
//!
//! - Dashboard: `/`, polling the JSON metric resources
//! - Resources: `/api/revenue`, `/api/masterwealth`, `/api/emergency-funds`
//! - Webhook intake: `/webhook/paypal`
//! - Ops: `/health`, `/readyz`, `/metrics`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use revenue_core::error::{Result, RevenueError};
use revenue_service::{app_state::AppState, config, router, shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "revenue-agent failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.service.listen_addr()?;

    let grace = cfg.service.drain_grace();
    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "revenue-agent starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RevenueError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::drain_then_stop(
            state,
            shutdown::os_signal(),
            grace,
        ))
        .await
        .map_err(|e| RevenueError::Internal(format!("server failed: {e}")))?;

    tracing::info!("revenue-agent stopped");
    Ok(())
}
