//! Readiness flips to draining before the listener is told to stop.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::time::Duration;

use axum::http::StatusCode;
use tokio::sync::oneshot;

use revenue_service::shutdown::drain_then_stop;
use support::{app, get};

#[tokio::test]
async fn readyz_reports_draining_during_grace_period() {
    let (state, router) = app();
    let (tx, rx) = oneshot::channel::<()>();

    let stop = tokio::spawn(drain_then_stop(
        state.clone(),
        async move {
            let _ = rx.await;
        },
        Duration::from_millis(300),
    ));

    assert_eq!(get(&router, "/readyz").await.status, StatusCode::OK);

    tx.send(()).unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // still serving, but out of rotation
    assert!(!stop.is_finished());
    let r = get(&router, "/readyz").await;
    assert_eq!(r.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(r.text(), "draining");
    assert_eq!(get(&router, "/health").await.status, StatusCode::OK);

    tokio::time::timeout(Duration::from_secs(5), stop)
        .await
        .expect("drain must finish after the grace period")
        .unwrap();
    assert!(state.is_draining());
}

#[tokio::test]
async fn nothing_drains_before_the_signal() {
    let (state, _router) = app();
    let stop = tokio::spawn(drain_then_stop(
        state.clone(),
        std::future::pending::<()>(),
        Duration::ZERO,
    ));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!state.is_draining());
    assert!(!stop.is_finished());
    stop.abort();
}
