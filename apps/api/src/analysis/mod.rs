// Profile analysis: profile + user type → prompt → structured assessment (or the fallback).
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
