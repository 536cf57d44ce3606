use std::sync::Arc;

use crate::assessment::catalog::CareerCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; read-only afterwards.
    pub catalog: Arc<CareerCatalog>,
    pub config: Config,
}
