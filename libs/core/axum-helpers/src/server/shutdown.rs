use tokio::signal;
use tracing::{error, info};

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(e) => {
            error!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Completes on SIGINT (Ctrl+C) or SIGTERM.
///
/// Pass to `axum::serve(..).with_graceful_shutdown(..)`; in-flight requests
/// are allowed to finish.
pub async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate() => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
