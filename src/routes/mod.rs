//! HTTP route handlers.
//!
//! Two fixed routes are registered: the health probe and the root banner.
//! Everything else, including a known path with the wrong method, answers
//! 404 with an empty body.

pub mod health;
pub mod home;

use axum::{middleware, response::Response, routing::get, Router};
use http::{header::ALLOW, StatusCode};

use crate::config::{HEALTH_PATH, ROOT_PATH};
use crate::middleware::request_id_layer;

/// Fallback for unmatched paths and methods.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Drops the `Allow` header the method router attaches to its fallback
/// responses, so a wrong method looks the same as an unknown path.
async fn strip_allow_on_not_found(mut response: Response) -> Response {
    if response.status() == StatusCode::NOT_FOUND {
        response.headers_mut().remove(ALLOW);
    }
    response
}

/// Creates the Axum router with both routes and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health::health).fallback(not_found))
        .route(ROOT_PATH, get(home::index).fallback(not_found))
        .fallback(not_found)
        .layer(middleware::map_response(strip_allow_on_not_found))
        // Request ID middleware - outermost so the span covers the fallback too
        .layer(middleware::from_fn(request_id_layer))
}
