//! Axum route handlers for resume ingestion.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::models::profile::PartialProfile;
use crate::resume::encoder::mime_for_upload;
use crate::resume::ingest::ingest_resume;
use crate::state::AppState;

/// Multipart field carrying the resume file.
const FILE_FIELD: &str = "file";

/// POST /api/v1/resume/ingest
///
/// Accepts a multipart upload with a `file` field and returns whatever profile
/// fields could be extracted. Read, timeout and extraction failures return `{}`,
/// not an error.
pub async fn handle_ingest_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PartialProfile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mime_type = mime_for_upload(field.content_type(), field.file_name());

        // The body is read inside ingestion so the encode timeout covers the network read
        let profile = ingest_resume(
            state.models.as_ref(),
            field.bytes(),
            &mime_type,
            state.config.encode_timeout,
        )
        .await?;

        return Ok(Json(profile));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
