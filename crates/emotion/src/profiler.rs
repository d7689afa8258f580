//! The Emotion Profiler — ranks the classifier distribution and derives
//! the summary, tone, and blend the prompt assembler consumes.
//!
//! The classification collaborator is a black box behind the `Classifier`
//! trait. Classification failures are not retried here; the orchestrator
//! decides how to surface them.

use crate::lexicon;
use attune_core::classifier::Classifier;
use attune_core::emotion::{EmotionProfile, EmotionScore};
use attune_core::error::ClassifierError;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// How many top emotions feed the profile.
const TOP_K: usize = 3;

/// Derives a ranked `EmotionProfile` from classifier output.
pub struct EmotionProfiler {
    classifier: Arc<dyn Classifier>,
}

impl EmotionProfiler {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Profile a user message.
    ///
    /// Obtains the full distribution, sorts it descending by score (stable,
    /// so ties keep the classifier's order), keeps the top 3 entries, and
    /// derives the summary, tone, and blend description.
    pub async fn profile(&self, text: &str) -> Result<EmotionProfile, ClassifierError> {
        let mut scores = self.classifier.classify(text).await?;
        if scores.is_empty() {
            return Err(ClassifierError::EmptyDistribution);
        }

        // Stable sort: equal scores keep the classifier's original order.
        scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scores.truncate(TOP_K);

        // Labels arrive in go_emotions form; keep the base before any '_'.
        let top: Vec<EmotionScore> = scores
            .into_iter()
            .map(|s| EmotionScore {
                label: base_label(&s.label).to_string(),
                score: s.score,
            })
            .collect();

        let dominant = top[0].label.clone();
        let tone = lexicon::tone_for(&dominant).to_string();
        let summary = render_summary(&top);
        let blend = render_blend(&top);

        debug!(%dominant, %tone, count = top.len(), "Profiled message emotions");

        Ok(EmotionProfile {
            dominant,
            top,
            summary,
            tone,
            blend,
        })
    }
}

/// Strip any sub-label suffix: "joy_intense" → "joy".
fn base_label(label: &str) -> &str {
    label.split('_').next().unwrap_or(label)
}

/// Render "<emoji> <Capitalized label> (<score>)" entries joined by ", ".
fn render_summary(top: &[EmotionScore]) -> String {
    top.iter()
        .map(|e| {
            format!(
                "{} {} ({:.2})",
                lexicon::emoji_for(&e.label),
                lexicon::capitalize(&e.label),
                e.score
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the natural-language blend of the top labels.
///
/// 1 label → the label; 2 → "both A and B"; 3 → "a mix of A, B and C".
fn render_blend(top: &[EmotionScore]) -> String {
    let labels: Vec<&str> = top.iter().map(|e| e.label.as_str()).collect();
    match labels.len() {
        0 => String::new(),
        1 => labels[0].to_string(),
        2 => format!("both {} and {}", labels[0], labels[1]),
        _ => format!(
            "a mix of {} and {}",
            labels[..labels.len() - 1].join(", "),
            labels[labels.len() - 1]
        ),
    }
}
