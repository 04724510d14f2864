//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no API of its own. It renders the Leptos app with SSR,
//! serves the compiled WASM/CSS bundle under `/pkg`, and answers health
//! probes. All claim, comment, and auth traffic goes from the browser
//! straight to the configured backend and auth provider.


use std::path::PathBuf;

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use client::app::{App, shell};
use client::config::ClientConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Load Leptos options from the build environment and assemble the router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section or `LEPTOS_*` env).
pub fn leptos_app(config: &AppConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(app(conf.leptos_options, config.client_config()))
}

/// SSR pages + static bundle + health probe.
pub fn app(leptos_options: LeptosOptions, client_config: ClientConfig) -> Router {
    let routes = generate_route_list({
        let config = client_config.clone();
        move || view! { <App config=config.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), client_config.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
