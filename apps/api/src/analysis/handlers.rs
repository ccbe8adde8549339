//! Axum route handlers for profile analysis.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::analyze_profile;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::profile::{UserProfile, UserType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub user_type: UserType,
}

/// POST /api/v1/analysis
///
/// Always answers with a complete assessment: the model's, or the fallback.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = analyze_profile(state.models.as_ref(), &request.profile, request.user_type).await?;
    Ok(Json(result))
}
