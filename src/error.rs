use std::io;
use std::net::SocketAddr;

/// Failures that stop the responder.
///
/// Request-level problems never surface here; hyper and the router's
/// not-found fallback answer those on their own.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}
