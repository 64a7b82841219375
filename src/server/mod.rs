//! Static Host
//!
//! Serves the built Pivori Studio dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## App
//! - `GET /`, `/services`, `/settings` - App shell (`index.html`)
//! - `GET /*` - Static asset from the dist directory, else the shell with 404
//!
//! # Example
//!
//! ```rust,no_run
//! use pivori_studio::server::{serve, AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::new("127.0.0.1", 8084).with_dist_dir("pivori-ui/dist");
//!     serve(AppState::new(config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::{AppState, ServerConfig};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback(routes::shell::serve_app)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Pivori Studio listening on {}", addr);
    tracing::info!("Serving dashboard from {:?}", config.dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Pivori Studio shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
