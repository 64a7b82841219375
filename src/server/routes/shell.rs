//! App Shell Routes
//!
//! Fallback handler for everything outside `/health`. Page paths get the
//! `index.html` shell so deep links survive a reload; other paths are
//! looked up in the dist directory and fall back to the shell with a 404,
//! which the client renders as its Not Found page.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::io;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::router::Outlet;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// Fallback: app shell for page paths, static files otherwise
pub async fn serve_app(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let method = request.method();
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = request.uri().path().to_string();

    match Outlet::resolve(&path) {
        Outlet::Page(page) => {
            tracing::debug!(%path, %page, "Serving app shell");
            shell_response(&state, StatusCode::OK).await
        }
        Outlet::NotFound if is_shell_file(&path) => {
            tracing::debug!(%path, "Shell file requested directly, serving as 404");
            shell_response(&state, StatusCode::NOT_FOUND).await
        }
        Outlet::NotFound => {
            let served = ServeDir::new(&state.config.dist_dir).oneshot(request).await;
            match served {
                Ok(response) if response.status() != StatusCode::NOT_FOUND => {
                    response.into_response()
                }
                _ => {
                    tracing::debug!(%path, "No page or asset, serving shell as 404");
                    shell_response(&state, StatusCode::NOT_FOUND).await
                }
            }
        }
    }
}

/// `/index.html` is not a route; it must not bypass the Not Found view
fn is_shell_file(path: &str) -> bool {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .eq(["index.html"])
}

async fn shell_response(state: &AppState, status: StatusCode) -> Response {
    match load_shell(state).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn load_shell(state: &AppState) -> ServerResult<String> {
    let path = state.config.shell_path();

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(html),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ServerError::ShellMissing(path)),
        Err(e) => Err(e.into()),
    }
}
