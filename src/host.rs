//! SSR host assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds one Axum router that server-renders the Leptos shell for every app
//! route, serves the compiled WASM bundle under `/pkg`, and answers
//! `/healthz`. The lead API itself is a separate service.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures surface as [`HostError`]; `main` logs them and exits.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

/// Leptos SSR routes plus static assets and health check.
///
/// # Errors
///
/// Returns [`HostError::Leptos`] if the Leptos configuration cannot be loaded
/// (missing or malformed `[package.metadata.leptos]`).
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());
    Ok(router)
}

/// Bind and serve until the process is stopped.
///
/// # Errors
///
/// Returns a [`HostError`] if the router cannot be built, the address cannot
/// be bound, or the server loop fails.
pub async fn serve(config: HostConfig) -> Result<(), HostError> {
    let router = app()?;
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind { addr: config.addr, source })?;
    tracing::info!(addr = %config.addr, "lead dashboard listening");
    axum::serve(listener, router).await.map_err(HostError::Serve)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
