#![forbid(unsafe_code)]

use bestiary_model::Dataset;
use bestiary_server::{
    build_router, validate_startup_config_contract, ApiConfig, AppState, ServerConfig,
};
use bestiary_source::{MongoSource, RecordSource};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_json);

    let api = ApiConfig::from_env();
    validate_startup_config_contract(&api)?;

    // Load-once lifecycle: one full-collection fetch at startup; a failure
    // here is terminal for the session, with no retry and no partial dataset.
    let source = MongoSource::connect(
        &config.store_uri,
        config.store_database.clone(),
        config.store_collection.clone(),
    )
    .await
    .map_err(|e| format!("record source init failed: {e}"))?;
    let documents = source
        .fetch_all()
        .await
        .map_err(|e| format!("record fetch failed: {e}"))?;
    let dataset = Arc::new(Dataset::from_documents(&documents));
    if dataset.is_empty() {
        warn!("record source returned zero records; serving an empty dataset");
    }
    info!(
        records = dataset.len(),
        collection = %config.store_collection,
        "dataset loaded"
    );

    let state = AppState::with_config(dataset, api);
    let app = build_router(state.clone());

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.bind))?;
    info!("bestiary-server listening on {}", config.bind);

    let ready = state.ready.clone();
    let drain_ms = config.shutdown_drain_ms;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            // Flip readiness first so load balancers stop routing, then
            // drain in-flight requests.
            ready.store(false, Ordering::Relaxed);
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
