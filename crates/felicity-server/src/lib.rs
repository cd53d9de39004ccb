#![forbid(unsafe_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

mod config;
mod http_handlers;
mod loader;
mod store;

pub use config::ServerConfig;
pub use loader::load_dataset;
pub use store::DatasetStore;

pub const CRATE_NAME: &str = "felicity-server";

/// Shared request-handling state. The dataset store is constructed once in
/// `main` and injected here instead of living in module-level state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub config: ServerConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self::with_config(store, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<DatasetStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http_handlers::healthz_handler))
        .route("/readyz", get(http_handlers::readyz_handler))
        .route("/version", get(http_handlers::version_handler))
        .route("/api/data", get(http_handlers::data_handler))
        .route("/api/predict", post(http_handlers::predict_handler))
        .route("/", get(http_handlers::index_handler))
        .route("/main.js", get(http_handlers::main_js_handler))
        .route("/style.css", get(http_handlers::style_css_handler))
        .fallback(http_handlers::fallback_handler)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
