// src/server.rs
use std::{future::Future, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;

use crate::{config::ServerConfig, routes, services::chatbot::ReplyMode, state::AppState};

/// Binds the configured address. Port 0 asks the OS for a free port; read
/// the result back from `local_addr`.
pub async fn bind(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))
}

/// Serves the chat routes on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, mode: ReplyMode, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    let state = Arc::new(AppState::new(mode));
    let app = routes::create_router().with_state(state);

    // Launchers scan stdout for this exact line to learn the port.
    println!("Server starting on port {}", addr.port());
    tracing::info!(%addr, %mode, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let listener = bind(&config).await?;
    serve(listener, config.mode, shutdown_signal()).await
}

/// Wait for Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
