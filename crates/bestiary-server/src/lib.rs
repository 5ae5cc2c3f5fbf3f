#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use bestiary_model::Dataset;
use bestiary_query::Baseline;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

mod config;
mod http;

pub use config::{validate_startup_config_contract, ApiConfig, ServerConfig};

pub const CRATE_NAME: &str = "bestiary-server";

#[derive(Default)]
pub struct RequestMetrics {
    pub requests_total: AtomicU64,
    pub client_errors_total: AtomicU64,
    pub server_errors_total: AtomicU64,
}

impl RequestMetrics {
    pub fn observe(&self, status: StatusCode) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if status.is_client_error() {
            self.client_errors_total.fetch_add(1, Ordering::Relaxed);
        } else if status.is_server_error() {
            self.server_errors_total.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Shared per-process state. The dataset is loaded once before the state is
/// constructed and is read-only from then on: single writer at init, many
/// readers after, no locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub baseline: Baseline,
    pub api: ApiConfig,
    pub ready: Arc<AtomicBool>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
    pub(crate) metrics: Arc<RequestMetrics>,
}

impl AppState {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(dataset, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(dataset: Arc<Dataset>, api: ApiConfig) -> Self {
        let baseline = Baseline::of(&dataset);
        Self {
            dataset,
            baseline,
            api,
            ready: Arc::new(AtomicBool::new(true)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            metrics: Arc::new(RequestMetrics::default()),
        }
    }

    #[must_use]
    pub fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::healthz_handler))
        .route("/readyz", get(http::readyz_handler))
        .route("/v1/version", get(http::version_handler))
        .route("/v1/summary", get(http::analytics::summary_handler))
        .route("/v1/creatures/top", get(http::analytics::top_handler))
        .route("/v1/types/means", get(http::analytics::type_means_handler))
        .route(
            "/v1/types/distribution",
            get(http::analytics::type_distribution_handler),
        )
        .route(
            "/v1/generations/distribution",
            get(http::analytics::generation_distribution_handler),
        )
        .route(
            "/v1/totals/histogram",
            get(http::analytics::total_histogram_handler),
        )
        .route("/v1/stats/means", get(http::analytics::stat_means_handler))
        .route("/v1/search", get(http::search::search_handler))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
