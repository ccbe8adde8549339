//! Resume ingestion: turns an uploaded resume into a partially filled profile.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::llm_client::{
    generate_json, GenerateRequest, GenerativeModel, LlmError, ModelProvider, Part,
};
use crate::models::profile::PartialProfile;
use crate::resume::encoder::{encode_upload, EncodeError};
use crate::resume::prompts::{resume_schema, RESUME_PARSE_PROMPT};

#[derive(Debug, Error)]
enum IngestError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Model reply for a resume, as declared by `resume_schema()`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResumeExtraction {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    education_level: Option<String>,
    #[serde(default)]
    field_of_study: Option<String>,
    #[serde(default)]
    work_experience_years: Option<f64>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    english_score: Option<f64>,
}

impl From<ResumeExtraction> for PartialProfile {
    fn from(extraction: ResumeExtraction) -> Self {
        PartialProfile {
            name: extraction.name,
            // an empty country is as good as none
            country_of_residence: extraction.country.filter(|c| !c.is_empty()),
            education_level: extraction.education_level,
            field_of_study: extraction.field_of_study,
            work_experience_years: extraction.work_experience_years,
            english_score: extraction.english_score,
        }
    }
}

/// Extracts profile fields from a resume upload.
///
/// `upload` is the pending read of the file body; it is only polled once a model
/// client exists, and is bounded by `encode_timeout`.
///
/// Only a missing credential is returned as an error. Read, timeout, transport
/// and parse failures are logged and produce an empty `PartialProfile`.
pub async fn ingest_resume<F, B, E>(
    provider: &dyn ModelProvider,
    upload: F,
    mime_type: &str,
    encode_timeout: Duration,
) -> Result<PartialProfile, LlmError>
where
    F: Future<Output = Result<B, E>> + Send,
    B: AsRef<[u8]> + Send,
    E: std::fmt::Display + Send,
{
    let model = provider.model()?;

    match extract_profile(model.as_ref(), upload, mime_type, encode_timeout).await {
        Ok(profile) => {
            info!(mime_type, fields_found = !profile.is_empty(), "Resume ingested");
            Ok(profile)
        }
        Err(e) => {
            error!(error = %e, mime_type, "Resume ingestion failed; returning empty profile");
            Ok(PartialProfile::default())
        }
    }
}

async fn extract_profile<F, B, E>(
    model: &dyn GenerativeModel,
    upload: F,
    mime_type: &str,
    encode_timeout: Duration,
) -> Result<PartialProfile, IngestError>
where
    F: Future<Output = Result<B, E>> + Send,
    B: AsRef<[u8]> + Send,
    E: std::fmt::Display + Send,
{
    let payload = encode_upload(upload, mime_type, encode_timeout).await?;

    let request = GenerateRequest {
        parts: vec![
            Part::text(format!("{RESUME_PARSE_PROMPT}\n{NO_INVENTION_INSTRUCTION}")),
            payload.into(),
        ],
        response_schema: resume_schema(),
    };

    let extraction: ResumeExtraction = generate_json(model, &request).await?;
    Ok(extraction.into())
}
