// Resume ingestion: upload → inline payload → structured extraction → partial profile.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod encoder;
pub mod handlers;
pub mod ingest;
pub mod prompts;
