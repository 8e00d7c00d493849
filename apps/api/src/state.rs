use std::sync::Arc;

use crate::classifier::PlacementClassifier;
use crate::config::Config;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Accounts, sessions and prediction history. Backend chosen at startup.
    pub store: Arc<dyn Store>,
    /// `None` when the model artifact failed to load; prediction is then unavailable.
    pub classifier: Option<Arc<dyn PlacementClassifier>>,
    pub config: Config,
}
