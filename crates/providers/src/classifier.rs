//! HTTP emotion classifier — works with Hugging Face-style
//! text-classification endpoints (the Inference API, a local
//! text-embeddings-inference / transformers server, or any compatible
//! service).
//!
//! The endpoint truncates over-length input itself (`"truncation": true`),
//! so any non-empty text is accepted. Responses arrive either nested
//! (`[[{label, score}, ...]]`) or flat (`[{label, score}, ...]`) depending
//! on the server; both shapes are tolerated.

use async_trait::async_trait;
use attune_core::classifier::Classifier;
use attune_core::emotion::EmotionScore;
use attune_core::error::ClassifierError;
use serde::Deserialize;
use tracing::{debug, warn};

/// A classifier backed by an HTTP text-classification endpoint.
pub struct HttpClassifier {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpClassifier {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiLabelScore {
    label: String,
    score: f32,
}

/// The two response shapes classification servers emit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiClassification {
    Nested(Vec<Vec<ApiLabelScore>>),
    Flat(Vec<ApiLabelScore>),
}

impl ApiClassification {
    fn into_scores(self) -> Vec<EmotionScore> {
        let entries = match self {
            ApiClassification::Nested(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            ApiClassification::Flat(entries) => entries,
        };
        entries
            .into_iter()
            .map(|e| EmotionScore::new(e.label, e.score))
            .collect()
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let body = serde_json::json!({
            "inputs": text,
            "parameters": { "truncation": true }
        });

        debug!(model = %self.model, chars = text.len(), "Sending classification request");

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 404 {
            return Err(ClassifierError::ModelNotFound(self.model.clone()));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Classifier returned error");
            return Err(ClassifierError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let parsed: ApiClassification =
            response.json().await.map_err(|e| ClassifierError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let scores = parsed.into_scores();
        if scores.is_empty() {
            return Err(ClassifierError::EmptyDistribution);
        }

        Ok(scores)
    }
}
