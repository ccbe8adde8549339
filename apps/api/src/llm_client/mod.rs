//! LLM client: the single point of entry for all Gemini API calls in Pathwise.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All model interactions MUST go through `ModelProvider` / `GenerativeModel`.
//!
//! Model: gemini-2.5-flash (hardcoded, not configurable)

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::Config;

#[cfg(test)]
pub mod mock;
pub mod prompts;
pub mod schema;

/// The model used for all LLM calls in Pathwise.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY)")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Base64 file content paired with its MIME type, sent inline with a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlinePayload {
    pub mime_type: String,
    pub data: String,
}

/// One piece of multi-part request content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlinePayload,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

impl From<InlinePayload> for Part {
    fn from(inline_data: InlinePayload) -> Self {
        Part::InlineData { inline_data }
    }
}

/// A single structured-output request: user content plus the JSON schema the
/// reply must conform to.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub parts: Vec<Part>,
    pub response_schema: Value,
}

impl GenerateRequest {
    /// All text parts joined with newlines. Handy for logging and prompt inspection.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: &'a [Part],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Builds a response carrying a single text part.
    #[cfg(test)]
    pub fn from_text(text: impl Into<String>) -> Self {
        GenerateResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            usage_metadata: None,
        }
    }

    /// Concatenated text of the first candidate. `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Traits
// ────────────────────────────────────────────────────────────────────────────

/// A hosted model that answers structured-output requests.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError>;
}

/// Hands out a ready model client, or fails before any network call is possible.
///
/// Carried in `AppState` as `Arc<dyn ModelProvider>`.
pub trait ModelProvider: Send + Sync {
    fn model(&self) -> Result<Arc<dyn GenerativeModel>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini implementation
// ────────────────────────────────────────────────────────────────────────────

/// Builds `GeminiClient`s from the injected configuration.
///
/// The HTTP client is built once; each `model()` call only checks the
/// credential and wraps the shared connection pool.
#[derive(Clone)]
pub struct ClientFactory {
    http: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ClientFactory {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl ModelProvider for ClientFactory {
    fn model(&self) -> Result<Arc<dyn GenerativeModel>, LlmError> {
        let Some(api_key) = self.api_key.clone() else {
            error!("GEMINI_API_KEY is not set; refusing to build a model client");
            return Err(LlmError::MissingCredential);
        };
        Ok(Arc::new(GeminiClient {
            http: self.http.clone(),
            api_key,
            endpoint: format!(
                "{}/v1beta/models/{MODEL}:generateContent",
                self.base_url
            ),
        }))
    }
}

/// Gemini `generateContent` client. One attempt per call, no retries.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: &request.parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
            },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                model = MODEL,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini call succeeded"
            );
        }

        Ok(parsed)
    }
}

/// Calls the model and deserializes the text reply as JSON.
/// No text at all is reported as `LlmError::EmptyContent`.
pub async fn generate_json<T: DeserializeOwned>(
    model: &dyn GenerativeModel,
    request: &GenerateRequest,
) -> Result<T, LlmError> {
    let response = model.generate(request).await?;

    let Some(text) = response.text() else {
        let finish_reason = response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("none");
        warn!(finish_reason, "Gemini returned no text content");
        return Err(LlmError::EmptyContent);
    };

    // Schema mode should return bare JSON, but strip fences if the model adds them anyway
    let text = strip_json_fences(&text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
