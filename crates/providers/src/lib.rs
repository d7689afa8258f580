//! # Attune Providers
//!
//! HTTP adapters for the two external model collaborators:
//! - [`OllamaChatProvider`] — chat completion via Ollama's native API
//! - [`HttpClassifier`] — multi-label emotion classification via an
//!   HF-style text-classification endpoint
//!
//! Both are thin wrappers: all ranking, blending, and prompt logic lives
//! in `attune-emotion` and `attune-engine`.

pub mod classifier;
pub mod ollama;

pub use classifier::HttpClassifier;
pub use ollama::OllamaChatProvider;

use attune_config::AppConfig;
use std::sync::Arc;

/// Build the default chat provider from config.
pub fn chat_from_config(config: &AppConfig) -> Arc<OllamaChatProvider> {
    Arc::new(OllamaChatProvider::new(&config.chat_base_url))
}

/// Build the default classifier from config.
pub fn classifier_from_config(config: &AppConfig) -> Arc<HttpClassifier> {
    Arc::new(HttpClassifier::new(
        &config.classifier_base_url,
        &config.classifier_model,
        config.classifier_api_key.clone(),
    ))
}
