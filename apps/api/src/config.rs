use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres store when set, in-memory store otherwise.
    pub database_url: Option<String>,
    pub model_path: String,
    pub history_limit: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            model_path: "model/placement_model.json".to_string(),
            history_limit: 10,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            model_path: optional_env("MODEL_PATH").unwrap_or(defaults.model_path),
            history_limit: parse_env("HISTORY_LIMIT", defaults.history_limit)
                .context("HISTORY_LIMIT must be a positive integer")?,
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("could not parse {key}='{raw}'")),
        None => Ok(default),
    }
}
