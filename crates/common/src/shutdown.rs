//! Process lifecycle helpers
//!
//! Wait for SIGINT/SIGTERM, then stop accepting connections and give
//! in-flight requests a bounded grace period before releasing the listener.

use std::{future::Future, time::Duration};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, watch},
};
use tracing::{error, info, warn};

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(event = "signal_install_failed", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(event = "signal_install_failed", error = %e, "cannot listen for SIGTERM");
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

/// Serve `app` until `signal` resolves, then drain for at most `grace`.
///
/// Requests still running when the grace period ends are cut off with
/// `503 Service Unavailable`, which lets their connections close.
pub async fn serve_with_grace<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    signal: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let (deadline_tx, deadline_rx) = watch::channel(false);
    let app = app.layer(middleware::from_fn_with_state(deadline_rx, cut_off_at_deadline));
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        res = &mut server => {
            return match res {
                Ok(res) => res.map_err(Into::into),
                Err(e) => Err(e.into()),
            };
        }
        _ = signal => {}
    }

    info!(%addr, event = "shutdown_signal", grace_secs = grace.as_secs(), "stop accepting new requests");
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(Ok(res)) => res?,
        Ok(Err(e)) => return Err(e.into()),
        Err(_) => {
            warn!(%addr, event = "grace_elapsed", "in-flight requests did not finish in time");
            let _ = deadline_tx.send(true);
            if tokio::time::timeout(CUT_OFF_FLUSH, &mut server).await.is_err() {
                server.abort();
            }
        }
    }
    info!(%addr, event = "stop", "server stopped");
    Ok(())
}

/// Time given to cut-off responses to reach their clients.
const CUT_OFF_FLUSH: Duration = Duration::from_secs(1);

async fn cut_off_at_deadline(
    State(mut deadline): State<watch::Receiver<bool>>,
    req: Request,
    next: Next,
) -> Response {
    let passed = async move {
        loop {
            let reached = *deadline.borrow_and_update();
            if reached || deadline.changed().await.is_err() {
                break;
            }
        }
    };
    tokio::select! {
        res = next.run(req) => res,
        _ = passed => {
            warn!(event = "request_cut_off", "request aborted after the shutdown grace period");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn stops_after_signal_and_releases_listener() -> anyhow::Result<()> {
        let app = Router::new().route("/ping", get(|| async { "pong" }));
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve_with_grace(listener, app, Duration::from_secs(2), async move {
            let _ = rx.await;
        }));

        let body = reqwest::get(format!("http://{addr}/ping")).await?.text().await?;
        assert_eq!(body, "pong");

        tx.send(()).ok();
        handle.await??;

        assert!(reqwest::get(format!("http://{addr}/ping")).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn in_flight_request_is_cut_off_when_grace_elapses() -> anyhow::Result<()> {
        let app = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "done"
            }),
        );
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_grace(listener, app, Duration::from_millis(300), async move {
            let _ = rx.await;
        }));
        let request = tokio::spawn(reqwest::get(format!("http://{addr}/slow")));
        tokio::time::sleep(Duration::from_millis(200)).await;

        let started = std::time::Instant::now();
        tx.send(()).ok();
        tokio::time::timeout(Duration::from_secs(5), server).await???;
        assert!(started.elapsed() < Duration::from_secs(5));

        let outcome = tokio::time::timeout(Duration::from_secs(5), request).await??;
        // a dropped connection is also acceptable; a completed request is not
        if let Ok(res) = outcome {
            assert_eq!(res.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
        }
        Ok(())
    }
}
