/// LLM Client — the single point of entry for all LLM API calls in Pathfinder.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// All LLM interactions MUST go through this module.
///
/// The provider is an OpenAI-style chat-completions endpoint. Unlike the
/// model, the endpoint/key/model are runtime-configurable because the admin
/// panel can point the service at a different provider while it runs.
use std::sync::{Arc, RwLock};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
const MAX_RETRIES: u32 = 3;

/// Runtime LLM provider settings, shared between the client and the admin
/// surface behind one `Arc<RwLock<_>>`.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The single LLM client used by the insight layer.
/// Wraps a chat-completions API with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: Arc<RwLock<LlmSettings>>,
}

impl LlmClient {
    pub fn new(settings: Arc<RwLock<LlmSettings>>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            settings,
        }
    }

    /// Makes a chat call and returns the assistant text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, LlmError> {
        // Snapshot settings before the first await; admin edits apply to
        // the next call.
        let settings = self
            .settings
            .read()
            .expect("LLM settings lock poisoned")
            .clone();

        let api_key = settings.api_key.ok_or(LlmError::NotConfigured)?;

        let request_body = ChatRequest {
            model: &settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&settings.endpoint)
                .bearer_auth(&api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the provider's error message
                let message = serde_json::from_str::<ProviderError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|text| !text.trim().is_empty())
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_fixture() -> Arc<RwLock<LlmSettings>> {
        Arc::new(RwLock::new(LlmSettings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }))
    }

    #[tokio::test]
    async fn test_chat_without_key_is_not_configured() {
        let client = LlmClient::new(settings_fixture());
        let err = client.chat("system", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }

    #[test]
    fn test_response_content_deserializes() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }
}
