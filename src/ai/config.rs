//! AI configuration — loads optional ~/.cuneiform/ai.yaml for LLM settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ExecError;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// AI configuration loaded from ~/.cuneiform/ai.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    /// LLM provider name ("anthropic" or "openai"). Empty means the API
    /// format is detected from `api_url`.
    pub provider: String,
    /// API endpoint URL.
    pub api_url: String,
    /// API key (secret).
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Upper bound on generated tokens per request.
    pub max_tokens: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
            api_url: DEFAULT_API_URL.into(),
            api_key: String::new(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl AiConfig {
    /// Apply `ANTHROPIC_API_KEY`, `CUNEIFORM_API_URL` and `CUNEIFORM_MODEL`
    /// from the environment. Unset or empty variables leave the value alone.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        if let Some(key) = var("ANTHROPIC_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = var("CUNEIFORM_API_URL") {
            self.api_url = url;
        }
        if let Some(model) = var("CUNEIFORM_MODEL") {
            self.model = model;
        }
        self
    }
}

/// Get the AI config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cuneiform").join("ai.yaml"))
}

/// Load AI configuration from ~/.cuneiform/ai.yaml.
/// Falls back to defaults when there is no home directory or no file.
pub fn load_config() -> Result<AiConfig, ExecError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(AiConfig::default()),
    }
}

/// Load AI configuration from a YAML file. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AiConfig, ExecError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no AI config file, using defaults");
        return Ok(AiConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ExecError::Config(format!("{}: {e}", path.display())))?;
    serde_yaml::from_str(&content).map_err(|e| ExecError::Config(format!("{}: {e}", path.display())))
}
