//! Prompt execution — sends a generated prompt to a generative-text service.
//!
//! The compiler never touches this module; callers hand it the finished
//! prompt string. Credentials come in through [`config::AiConfig`], passed
//! explicitly to the client.

pub mod config;
#[cfg(feature = "llm")]
pub mod llm;

use thiserror::Error;

pub use config::AiConfig;

/// Something that can turn a prompt into a response.
pub trait Executor {
    fn execute(&self, prompt: &str) -> Result<String, ExecError>;
}

/// Failure to obtain a response for a prompt.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("API key not set (ANTHROPIC_API_KEY or api_key in ai.yaml)")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("empty response from model")]
    EmptyResponse,

    #[error("config error: {0}")]
    Config(String),
}
