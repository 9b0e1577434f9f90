//! OpenAI chat-completions provider.
//!
//! Plain HTTP client against `{base}/chat/completions`. The request timeout
//! is bounded (default 30s) so a hung upstream surfaces as a request
//! failure instead of blocking the session forever.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

use super::{ChatMessage, CompletionRequest, CompletionResponse, LlmProvider};

const PROVIDER_NAME: &str = "openai";

/// Default public API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default request timeout for the single completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completion client for OpenAI-compatible endpoints.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self::with_base(api_key, model, DEFAULT_API_BASE, DEFAULT_TIMEOUT)
    }

    pub fn with_base(
        api_key: SecretString,
        model: impl Into<String>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    fn to_api_request(&self, request: &CompletionRequest) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            messages: request.messages.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = format!("{}/chat/completions", self.api_base);
        let payload = self.to_api_request(&request);

        let resp = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                LlmError::RequestFailed {
                    provider: PROVIDER_NAME.to_string(),
                    reason,
                }
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        let body: ApiResponse = resp.json().await.map_err(|e| LlmError::InvalidResponse {
            provider: PROVIDER_NAME.to_string(),
            reason: e.to_string(),
        })?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: PROVIDER_NAME.to_string(),
                reason: "empty choices".to_string(),
            })?;

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            input_tokens: body.usage.as_ref().map(|u| u.prompt_tokens),
            output_tokens: body.usage.as_ref().map(|u| u.completion_tokens),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn error_for_status(status: StatusCode, body: &str) -> LlmError {
    let provider = PROVIDER_NAME.to_string();
    match status.as_u16() {
        401 | 403 => LlmError::AuthFailed { provider },
        429 => LlmError::RateLimited { provider },
        _ => {
            let reason = serde_json::from_str::<ApiErrorEnvelope>(body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            LlmError::RequestFailed { provider, reason }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiChoice {
    message: ApiAssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiAssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    message: String,
}
