//! Informational endpoint handlers.
//!
//! Every handler builds its payload from literals (plus the wall clock for
//! `/`), so handlers share nothing and need no state.

use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Welcome message returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to DevOps CI/CD Pipeline with JFrog!";

/// Contract version reported by `GET /`.
pub const APP_VERSION: &str = "1.0.0";

/// Local date-time layout used for `timestamp`, without a UTC offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Response for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,

    /// Local date-time at which the request was handled.
    pub timestamp: String,

    pub version: String,
}

impl HomeResponse {
    /// Build the welcome payload stamped with the current local time.
    pub fn now() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            version: APP_VERSION.to_string(),
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub application: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
            application: "DevOps Demo App".to_string(),
        }
    }
}

/// Response for `GET /info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub app: String,

    /// Comma-separated list of the pipeline's tools.
    pub tools: String,

    pub description: String,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            app: "DevOps Demo Application".to_string(),
            tools: "GitHub, Jenkins, Docker, JFrog, Kubernetes".to_string(),
            description: "Complete CI/CD Pipeline Demo".to_string(),
        }
    }
}

/// `GET /`
pub async fn home() -> Json<HomeResponse> {
    let response = HomeResponse::now();
    debug!(timestamp = %response.timestamp, "Serving welcome message");
    Json(response)
}

/// `GET /health`
///
/// Liveness stub: reports `UP` without checking anything downstream.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// `GET /info`
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
