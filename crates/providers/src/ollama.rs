//! Ollama chat provider — talks to Ollama's native `/api/chat` endpoint.
//!
//! Non-streaming only: the engine waits for the complete reply. The
//! generation-length budget maps to Ollama's `num_predict` option.

use async_trait::async_trait;
use attune_core::chat::{ChatProvider, ChatRequest, ChatResponse};
use attune_core::error::ChatError;
use attune_core::message::{Role, Turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A chat provider backed by a local (or remote) Ollama server.
pub struct OllamaChatProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OllamaChatProvider {
    /// Create a provider for the given base URL, e.g. `http://localhost:11434`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn to_api_messages(messages: &[Turn]) -> Vec<ApiMessage<'_>> {
        messages
            .iter()
            .map(|t| ApiMessage {
                role: match t.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                },
                content: &t.content,
            })
            .collect()
    }
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ApiOptions {
    num_predict: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ApiResponse {
    message: ApiResponseMessage,
    #[serde(default)]
    model: String,
}

#[derive(Deserialize)]
struct ApiResponseMessage {
    content: String,
}

#[async_trait]
impl ChatProvider for OllamaChatProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        let url = format!("{}/api/chat", self.base_url);

        let mut body = serde_json::json!({
            "model": request.model,
            "messages": Self::to_api_messages(&request.messages),
            "stream": false,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["options"] = serde_json::json!(ApiOptions {
                num_predict: max_tokens,
                temperature: request.temperature,
            });
        }

        debug!(
            model = %request.model,
            turns = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 404 {
            return Err(ChatError::ModelNotFound(request.model));
        }

        if status == 429 {
            return Err(ChatError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Chat service returned error");
            return Err(ChatError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| ChatError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        if api_response.message.content.trim().is_empty() {
            return Err(ChatError::EmptyReply);
        }

        Ok(ChatResponse {
            content: api_response.message.content,
            model: api_response.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let provider = OllamaChatProvider::new("http://localhost:11434/");
        assert_eq!(provider.base_url, "http://localhost:11434");
    }

    #[test]
    fn messages_map_roles() {
        let turns = vec![Turn::user("hi"), Turn::assistant("hello")];
        let api = OllamaChatProvider::to_api_messages(&turns);
        assert_eq!(api[0].role, "user");
        assert_eq!(api[1].role, "assistant");
        assert_eq!(api[1].content, "hello");
    }

    #[test]
    fn response_parses() {
        let raw = r#"{
            "model": "mistral:7b-instruct-q5_0",
            "message": { "role": "assistant", "content": "Hello there!" },
            "done": true
        }"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.message.content, "Hello there!");
        assert_eq!(parsed.model, "mistral:7b-instruct-q5_0");
    }
}
