//! BlueGreen: a static HTTP responder for blue/green deployments.
//!
//! Serves a fixed health payload on `/actuator/health` and a fixed banner on
//! `/`, bound to `0.0.0.0:8080`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::ServerError;
pub use routes::create_router;
