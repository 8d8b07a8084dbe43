//! Model invocation: one chat-completion round trip per request.
//!
//! The [`ChatClient`] trait is the seam between the assistant service and the
//! remote model. Production code uses [`GroqClient`], which speaks the
//! OpenAI-compatible `/chat/completions` JSON shape; tests substitute a fake
//! returning canned completions.
//!
//! There is deliberately no retry, backoff, or rate-limit handling here: a
//! request is a single stateless round trip, and any transport, auth, or
//! quota failure surfaces unmodified to the caller.

use crate::config::{AssistantConfig, API_KEY_ENV};
use crate::error::AssistantError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// One turn of the conversation sent to the model.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The remote-model boundary: an ordered message list in, one completion out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError>;
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: usize,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

// ── Groq client ──────────────────────────────────────────────────────────

/// Chat client for Groq's OpenAI-compatible completion endpoint.
pub struct GroqClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
}

impl GroqClient {
    /// Build a client from the assistant config, resolving the API key from
    /// the config override or the `GROQ_API_KEY` environment variable.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = match &config.api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or(AssistantError::ApiKeyMissing { var: API_KEY_ENV })?,
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| AssistantError::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "Requesting completion: model={}, {} messages",
            self.model,
            messages.len()
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::ApiRequest {
                detail: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::ApiRequest {
                detail: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(AssistantError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| AssistantError::ApiRequest {
                detail: format!("Malformed completion response: {} — body: {}", e, body),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AssistantError::EmptyCompletion)
    }
}
