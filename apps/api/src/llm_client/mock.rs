//! Test doubles for `GenerativeModel` and `ModelProvider`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GenerateRequest, GenerateResponse, GenerativeModel, LlmError, ModelProvider};

enum Reply {
    Text(String),
    Empty,
    Fail,
}

/// Scripted model that records every request it receives.
pub struct MockModel {
    reply: Reply,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockModel {
    fn with_reply(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Self::with_reply(Reply::Text(text.into()))
    }

    pub fn empty() -> Arc<Self> {
        Self::with_reply(Reply::Empty)
    }

    pub fn failing() -> Arc<Self> {
        Self::with_reply(Reply::Fail)
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> GenerateRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("model was never called")
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(GenerateResponse::from_text(text.clone())),
            Reply::Empty => Ok(GenerateResponse::default()),
            Reply::Fail => Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

/// Provider that hands out a fixed mock, or behaves like a factory with no credential.
pub struct MockProvider {
    model: Option<Arc<MockModel>>,
}

impl MockProvider {
    pub fn with(model: Arc<MockModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn unconfigured() -> Self {
        Self { model: None }
    }
}

impl ModelProvider for MockProvider {
    fn model(&self) -> Result<Arc<dyn GenerativeModel>, LlmError> {
        match &self.model {
            Some(model) => Ok(model.clone() as Arc<dyn GenerativeModel>),
            None => Err(LlmError::MissingCredential),
        }
    }
}
