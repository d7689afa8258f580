//! Classifier trait — the abstraction over emotion-classification backends.
//!
//! A Classifier takes raw text and returns the full unordered label/score
//! distribution. The profiler ranks and interprets the result; the
//! classifier itself is a black box (an HTTP inference endpoint in the
//! default deployment). Over-length input is truncated by the backend, so
//! implementations must accept any non-empty text.

use crate::emotion::EmotionScore;
use crate::error::ClassifierError;
use async_trait::async_trait;

/// The emotion-classification collaborator.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// A human-readable name for this classifier backend.
    fn name(&self) -> &str;

    /// Classify text into an unordered multi-label distribution.
    ///
    /// Must not return an empty vector for non-empty input; backends that
    /// cannot produce labels report `ClassifierError::EmptyDistribution`.
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError>;
}
