//! Blocking HTTP client for LLM completion APIs.
//!
//! Speaks the Anthropic Messages API and the OpenAI-compatible chat
//! completions API; the format comes from the configured provider or,
//! failing that, the endpoint URL.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::config::AiConfig;
use super::{ExecError, Executor};

/// API format type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFormat {
    Anthropic,
    OpenAI,
}

impl ApiFormat {
    /// Pick the API format from the configured provider, falling back to
    /// detection from the URL when the provider is empty or unknown.
    pub fn from_config(config: &AiConfig) -> Self {
        match config.provider.trim().to_ascii_lowercase().as_str() {
            "anthropic" => ApiFormat::Anthropic,
            "openai" => ApiFormat::OpenAI,
            "" => Self::detect(&config.api_url),
            other => {
                tracing::warn!(provider = other, "unknown provider, detecting format from URL");
                Self::detect(&config.api_url)
            }
        }
    }

    /// Detect API format from URL
    pub fn detect(url: &str) -> Self {
        if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else {
            ApiFormat::OpenAI
        }
    }
}

pub struct LlmClient {
    client: Client,
    config: AiConfig,
    api_format: ApiFormat,
}

impl LlmClient {
    /// Build a client from explicit configuration. Fails if no API key is set.
    pub fn new(config: AiConfig) -> Result<Self, ExecError> {
        if config.api_key.is_empty() {
            return Err(ExecError::MissingApiKey);
        }
        let api_format = ApiFormat::from_config(&config);
        Ok(Self {
            client: Client::new(),
            config,
            api_format,
        })
    }

    pub fn api_format(&self) -> ApiFormat {
        self.api_format
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    // Both formats share the same shape for a single user turn.
    fn request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".into(),
                content: prompt.into(),
            }],
        }
    }

    fn send(&self, prompt: &str) -> Result<String, ExecError> {
        tracing::debug!(
            url = %self.config.api_url,
            model = %self.config.model,
            format = ?self.api_format,
            "sending prompt"
        );

        let builder = self.client.post(&self.config.api_url);
        let builder = match self.api_format {
            ApiFormat::Anthropic => builder
                .header("x-api-key", &self.config.api_key)
                .header("anthropic-version", "2023-06-01"),
            ApiFormat::OpenAI => {
                builder.header("Authorization", format!("Bearer {}", self.config.api_key))
            }
        };

        let response = builder
            .header("content-type", "application/json")
            .json(&self.request(prompt))
            .send()
            .map_err(|e| ExecError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ExecError::Http(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API returned an error");
            return Err(ExecError::Api {
                status: status.as_u16(),
                body,
            });
        }

        extract_text(self.api_format, &body)
    }
}

impl Executor for LlmClient {
    fn execute(&self, prompt: &str) -> Result<String, ExecError> {
        self.send(prompt)
    }
}

/// Pull the first text block out of a successful response body.
fn extract_text(format: ApiFormat, body: &str) -> Result<String, ExecError> {
    let text = match format {
        ApiFormat::Anthropic => {
            let completion: AnthropicResponse =
                serde_json::from_str(body).map_err(|e| ExecError::Http(e.to_string()))?;
            completion.content.into_iter().find_map(|c| c.text)
        }
        ApiFormat::OpenAI => {
            let completion: OpenAIResponse =
                serde_json::from_str(body).map_err(|e| ExecError::Http(e.to_string()))?;
            completion
                .choices
                .into_iter()
                .find_map(|c| c.message.content)
        }
    };
    text.ok_or(ExecError::EmptyResponse)
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

// Anthropic API format
#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

// OpenAI-compatible API format
#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}
