use crate::config::LlmConfig;
use async_trait::async_trait;
use domain::DomainError;
use domain::advisory::TextGenerator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Chat-completions client for OpenAI-compatible endpoints
pub struct OpenAiChatClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(config: &LlmConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| DomainError::Upstream(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

fn first_reply(body: &str) -> Result<String, DomainError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Upstream(format!("Malformed completion: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| DomainError::Upstream("Completion has no content".to_string()))
}

#[async_trait]
impl TextGenerator for OpenAiChatClient {
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::Upstream("LLM API key is not configured".to_string()))?;

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.7,
        };

        debug!(model = %self.model, "Requesting completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("LLM request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Upstream(format!("LLM response unreadable: {}", e)))?;

        if !status.is_success() {
            return Err(DomainError::Upstream(format!(
                "LLM returned HTTP {}",
                status.as_u16()
            )));
        }

        first_reply(&body)
    }
}
