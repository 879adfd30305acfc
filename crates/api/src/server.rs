//! HTTP server bootstrap: bind, serve, drain on shutdown.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use prodapi_catalog::{seed, ProductRepository};

use crate::app;
use crate::config::AppConfig;

/// Run the service until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let repository = if config.seed {
        seed::demo_repository().context("failed to load demo catalog")?
    } else {
        ProductRepository::new()
    };
    tracing::info!(products = repository.len(), "product repository ready");

    let app = app::build_app(Arc::new(repository));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    serve_until(listener, app, shutdown_signal(), config.shutdown_grace).await
}

/// Serve `app` until `shutdown` resolves, then give in-flight requests up to
/// `grace` to finish.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let stop = Arc::clone(&stop);
        async move { stop.notified().await }
    });
    let mut server = std::pin::pin!(server.into_future());

    tokio::select! {
        res = &mut server => return res.context("server error"),
        () = shutdown => {}
    }

    tracing::info!(grace_secs = grace.as_secs(), "shutdown requested; draining in-flight requests");
    // A stored permit wakes the waiter even if it has not polled yet.
    stop.notify_one();

    match tokio::time::timeout(grace, server).await {
        Ok(res) => {
            tracing::info!("server stopped");
            res.context("server error")
        }
        Err(_) => {
            tracing::warn!("grace period elapsed; abandoning in-flight requests");
            Ok(())
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
