//! HTTP front end for the texfmt indentation engine
//!
//! Exposes a formatting endpoint, a health check and a web page:
//!
//! - `POST /format` takes `{"latex_code": .., "indent_str": ..}` and answers
//!   with `{"formatted_code": ..}`
//! - `GET /health` reports the service version
//! - `GET /` serves a small page that posts to `/format`
//!
//! The engine keeps no state between calls, so requests are formatted
//! independently on tokio's blocking pool.

pub mod handlers;
pub mod types;

use anyhow::Context;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::net::TcpListener;

pub use handlers::*;
pub use types::*;

/// Address used when `TEXFMTD_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Build the router with all endpoints
///
/// Request bodies are not size-capped.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/format", post(format_latex))
        .layer(DefaultBodyLimit::disable())
}

/// Serve on an already bound listener until the task is cancelled.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    log::info!("texfmtd listening on http://{}", addr);
    axum::serve(listener, build_router())
        .await
        .context("server error")
}

/// Bind `addr` and serve.
pub async fn start_server(addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    serve(listener).await
}
