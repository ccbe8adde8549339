//! File-to-payload encoder: reads an upload to the end and base64-wraps it.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use base64::Engine;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::InlinePayload;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to read upload: {0}")]
    Read(String),

    #[error("reading upload timed out after {0:?}")]
    Timeout(Duration),
}

/// Awaits the full upload and returns its base64 content with the declared MIME type.
///
/// `read` is the pending body read (for a multipart field, `Field::bytes()`), so
/// `limit` bounds the real I/O: a stalled client yields `EncodeError::Timeout`
/// instead of holding the request open.
pub async fn encode_upload<F, B, E>(
    read: F,
    mime_type: &str,
    limit: Duration,
) -> Result<InlinePayload, EncodeError>
where
    F: Future<Output = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let bytes = tokio::time::timeout(limit, read)
        .await
        .map_err(|_| EncodeError::Timeout(limit))?
        .map_err(|e| EncodeError::Read(e.to_string()))?;
    let bytes = bytes.as_ref();

    debug!(size = bytes.len(), mime_type, "Upload encoded");

    Ok(InlinePayload {
        mime_type: mime_type.to_string(),
        data: base64::engine::general_purpose::STANDARD.encode(bytes),
    })
}

/// Picks the MIME type for an upload: the declared content type when present,
/// otherwise a guess from the file extension.
pub fn mime_for_upload(content_type: Option<&str>, file_name: Option<&str>) -> String {
    if let Some(declared) = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim())
        .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream")
    {
        return declared.to_string();
    }

    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
    .to_string()
}
