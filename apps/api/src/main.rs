mod auth;
mod classifier;
mod config;
mod db;
mod engine;
mod errors;
mod history;
mod models;
mod predict;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::classifier::{LogisticClassifier, PlacementClassifier};
use crate::config::Config;
use crate::db::open_store;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement Readiness API v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config).await?;
    info!("Store backend: {}", store.backend());

    let classifier = load_classifier(&config.model_path);

    let state = AppState {
        store,
        classifier,
        config: config.clone(),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// A missing or malformed artifact is not fatal: the service still answers
/// analyze and account requests, and reports `model_loaded: false`.
fn load_classifier(path: &str) -> Option<Arc<dyn PlacementClassifier>> {
    match LogisticClassifier::from_path(path) {
        Ok(model) => {
            info!("Placement model loaded from {path}");
            Some(Arc::new(model))
        }
        Err(e) => {
            warn!("Placement model unavailable ({path}): {e}");
            None
        }
    }
}
