use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;
use crate::store::{MemoryStore, PgStore, Store};

const PG_MAX_CONNECTIONS: u32 = 10;

/// Picks the store backend from configuration.
///
/// With `DATABASE_URL` set, connects to Postgres and bootstraps the schema;
/// otherwise everything lives in process memory.
pub async fn open_store(config: &Config) -> Result<Arc<dyn Store>> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    };

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(PG_MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("PostgreSQL connection pool established");

    let store = PgStore::new(pool);
    store.init_schema().await?;
    Ok(Arc::new(store))
}
