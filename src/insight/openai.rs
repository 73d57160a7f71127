//! OpenAI-compatible insight provider
//!
//! Blocking chat-completions client with conservative timeouts. The call
//! is attempted once; every failure mode (missing key, transport error,
//! non-success status, malformed body) maps to
//! [`LensError::InsightUnavailable`] for the engine to degrade.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{LensError, Result};
use crate::insight::TextInsightProvider;
use crate::models::config::Settings;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 120;

const SYSTEM_MESSAGE: &str =
    "You are a code analysis expert. Provide clear, concise insights about code repositories.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Chat-completions client for any OpenAI-compatible endpoint
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiProvider {
    /// Build a provider from settings. The API key comes from the
    /// configuration, falling back to the `OPENAI_API_KEY` environment
    /// variable; a missing key is only reported when a request is made.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("repolens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| LensError::config_error(format!("failed to create HTTP client: {}", err)))?;

        let api_key = settings
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }
}

impl TextInsightProvider for OpenAiProvider {
    fn request(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LensError::insight_unavailable("API key not configured"))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|err| LensError::insight_unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LensError::insight_unavailable(format!(
                "HTTP {} from insight API",
                status.as_u16()
            )));
        }

        let body: ChatResponse = response
            .json()
            .map_err(|err| LensError::insight_unavailable(format!("malformed response: {}", err)))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LensError::insight_unavailable("response contained no choices"))
    }
}
