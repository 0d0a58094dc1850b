//! Serving with a bounded graceful shutdown
//!
//! Once the shutdown signal fires, in-flight reviews get at most the drain
//! timeout to finish before the server returns.

use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing::{error, info, warn};

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = fired_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        _ = fired_rx => {}
    }

    warn!("Waiting up to {:?} for in-flight reviews to finish...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, &mut server).await {
        result
    } else {
        warn!(
            timeout_secs = drain_timeout.as_secs(),
            "Shutdown timeout elapsed, dropping in-flight requests"
        );
        Ok(())
    }
}

/// Wait for SIGINT or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
