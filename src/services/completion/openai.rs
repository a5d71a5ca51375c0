//! OpenAI chat completions provider
//!
//! POST {api_url}/chat/completions with a bearer token. Only the content of
//! the first choice is returned; the model's ranking is not parsed.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, CompletionClient, CompletionRequest};
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
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
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    fn into_text(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalApi("Completion response had an unexpected shape".to_string())
            })
    }
}

/// Error for a non-2xx reply; the body is logged but kept out of the message
fn upstream_status_error(status: reqwest::StatusCode, body: &str) -> AppError {
    tracing::warn!(status = %status, body = %body, "OpenAI API returned an error");
    AppError::ExternalApi(format!("OpenAI API returned status {}", status))
}

#[derive(Clone)]
pub struct OpenAiClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: String, model: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = ChatCompletionBody {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.settings.max_tokens,
            temperature: request.settings.temperature,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(upstream_status_error(status, &body));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion.into_text()?;

        tracing::debug!(
            model = %self.model,
            response_len = text.len(),
            "Completion received"
        );

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
