pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/ingest",
            post(resume::handle_ingest_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .with_state(state)
}
