use std::sync::Arc;

use crate::config::Config;
use crate::match_client::MatchService;
use crate::render::Templates;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub templates: Arc<Templates>,
    /// Matching service backend. Default: `HttpMatchClient` pointed at `MATCH_SERVICE_URL`.
    pub matcher: Arc<dyn MatchService>,
}
