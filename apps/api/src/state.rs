use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model client factory. `ClientFactory` in production, a mock in tests.
    pub models: Arc<dyn ModelProvider>,
    pub config: Config,
}
