use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Hosted text generation: prompt in, raw text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatCompletionGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: SecretString,
}

impl ChatCompletionGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: completions_endpoint(&config.generation_api_base_url),
            model: config.generation_model.clone(),
            api_key: config.generation_api_key.clone(),
        })
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn first_choice_content(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| AppError::GenerationError("Model returned no content".to_string()))
}

#[async_trait]
impl TextGenerator for ChatCompletionGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        log::info!("Requesting completion from model {}", self.model);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Generation request failed with status {}", status);
            return Err(AppError::GenerationError(format!(
                "Provider returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = first_choice_content(completion)?;

        log::debug!("Received {} bytes of generated text", content.len());
        Ok(content)
    }
}
