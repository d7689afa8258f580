//! ChatProvider trait — the abstraction over chat-completion backends.
//!
//! A ChatProvider sends the current conversation log to an LLM and returns
//! the complete reply. The engine calls `complete()` without knowing which
//! backend is configured (Ollama by default).

use crate::error::ChatError;
use crate::message::Turn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a single chat-completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The model to use (e.g. "mistral:7b-instruct-q5_0")
    pub model: String,

    /// The conversation turns, sent verbatim in order
    pub messages: Vec<Turn>,

    /// Generation-length budget for the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.7
}

/// A complete (non-streaming) reply from a chat backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The generated reply text, untrimmed
    pub content: String,

    /// Which model actually responded
    pub model: String,
}

/// The chat-completion collaborator.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// A human-readable name for this backend (e.g. "ollama").
    fn name(&self) -> &str;

    /// Send the conversation and get a complete reply.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ChatError>;
}
