use async_trait::async_trait;
use reqwest::{ClientBuilder, header};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::commentary::{
    errors::GenerationError,
    prompt::{ChatMessage, CommentaryRequest},
};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const MAX_OUTPUT_TOKENS: u32 = 5000;
const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Turns a digest plus persona into commentary text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentaryGenerator: Send + Sync {
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat completions backend.
#[derive(Clone)]
pub struct OpenAiGenerator {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: GENERATION_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CommentaryGenerator for OpenAiGenerator {
    #[instrument(skip_all, fields(persona = %request.persona, model = %self.model))]
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, GenerationError> {
        let config = request.persona.config();
        let messages = request.messages();
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: config.temperature,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        // One client per call; its connections close when it drops.
        let client = ClientBuilder::new()
            .timeout(self.timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Service { status, body });
        }

        // A stalled body is a transport failure, not a decode one
        let bytes = response
            .bytes()
            .await
            .map_err(GenerationError::from_reqwest_error)?;
        let content = parse_completion(&bytes)?;

        debug!(chars = content.len(), "commentary generated");
        Ok(content)
    }
}

/// First choice's message text, verbatim.
fn parse_completion(body: &[u8]) -> Result<String, GenerationError> {
    let completion: ChatCompletionResponse =
        serde_json::from_slice(body).map_err(|e| GenerationError::Decode(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(GenerationError::EmptyResponse)
}
