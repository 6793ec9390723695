//! HTTP server startup.
//!
//! Startup has two phases, binding and serving, each logged once. A bind
//! failure is final: there is no retry and no fallback port.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::listen_addr;
use crate::error::ServerError;

/// Bind a TCP listener on `addr`.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    tracing::info!(%addr, "Binding HTTP listener");

    TcpListener::bind(addr).await.map_err(|source| {
        tracing::error!(%addr, error = %source, "Failed to bind HTTP listener");
        ServerError::Bind { addr, source }
    })
}

/// Run the accept loop on an already bound listener.
///
/// Only returns if the listener itself fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Serving at http://{}", addr);

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Bind the fixed wildcard address and serve `app` on it.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    let listener = bind(listen_addr()).await?;
    serve(listener, app).await
}
