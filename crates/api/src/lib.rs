//! HTTP API server for the site content backend.
//!
//! Serves the content document, accepts authenticated updates and gallery
//! uploads, and serves the site's static pages, with structured logging
//! (tracing) and Prometheus metrics.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod uploads;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::routing::{get, post};
use content_store::ContentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use auth::StaticCredentials;
use config::Config;
use state::AppState;
use uploads::{MAX_UPLOAD_BYTES, UPLOADS_ROUTE, UploadDir};

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the Axum application router with all routes and shared state.
///
/// Static serving is confined to `state.static_dir` and the uploads
/// directory; nothing else on disk is reachable. Every `OPTIONS` request is
/// answered by the CORS layer with headers only.
pub fn create_app<S: ContentStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let static_dir = state.static_dir.clone();
    let uploads_dir = state.uploads.root().to_path_buf();

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/content",
            get(routes::content::get::<S>).post(routes::content::replace::<S>),
        )
        .route("/api/authenticate", post(routes::authenticate::login::<S>))
        .route(
            "/api/upload-image",
            post(routes::upload::image::<S>).layer(DefaultBodyLimit::max(
                MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .with_state(state)
        .merge(metrics_router)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service(
            "/dashboard",
            ServeFile::new(static_dir.join("dashboard.html")),
        )
        .nest_service(UPLOADS_ROUTE, ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state for `store` from configuration.
pub fn create_default_state<S: ContentStore + 'static>(
    config: &Config,
    store: S,
) -> Arc<AppState<S>> {
    let authenticator = StaticCredentials::new(
        config.admin_username.clone(),
        config.admin_password.clone(),
    );

    Arc::new(AppState {
        store,
        authenticator: Arc::new(authenticator),
        uploads: UploadDir::new(config.uploads_dir.clone()),
        static_dir: config.static_dir.clone(),
    })
}
