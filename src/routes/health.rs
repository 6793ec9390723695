//! Health check endpoint for load balancers and orchestrators.
//!
//! Liveness only: the payload is constant and no dependency is consulted.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::config::HEALTH_STATUS_UP;

/// Body of the health-check response, serialized as `{"status":"UP"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self {
            status: HEALTH_STATUS_UP.to_string(),
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}
