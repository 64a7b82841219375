//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (app shell is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::router::Page;
use crate::server::state::AppState;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Whether index.html is present in the dist directory
    pub shell: bool,
    /// Directory the bundle is served from
    pub dist_dir: String,
    /// Page paths answered with the app shell
    pub pages: Vec<String>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the built dashboard can be served.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if shell_present(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let shell = shell_present(&state).await;
    let status = if shell { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        shell,
        dist_dir: state.config.dist_dir.display().to_string(),
        pages: Page::ALL.iter().map(|p| p.path().to_string()).collect(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn shell_present(state: &AppState) -> bool {
    tokio::fs::metadata(state.config.shell_path())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
