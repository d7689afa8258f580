//! Emotion profile value objects.
//!
//! An `EmotionScore` is one (label, confidence) pair from the classifier.
//! An `EmotionProfile` is the derived, ranked view the prompt assembler
//! consumes: the top labels, a readable summary, a response tone directive,
//! and a natural-language blend description. Both are created fresh per
//! incoming message and discarded after use.

use serde::{Deserialize, Serialize};

/// A single (label, confidence) pair from the classification collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label, e.g. "joy", "curiosity"
    pub label: String,

    /// Confidence in [0, 1]
    pub score: f32,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// The ranked emotion view of one user message.
///
/// Invariants: `top` is non-empty and holds at most 3 entries, sorted by
/// score descending (ties keep classifier order); `dominant` equals
/// `top[0].label`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// The highest-confidence label
    pub dominant: String,

    /// Up to 3 entries, sorted by score descending
    pub top: Vec<EmotionScore>,

    /// Readable per-label summary with emoji and scores,
    /// e.g. "😊 Joy (0.80), 😨 Fear (0.30)"
    pub summary: String,

    /// Response tone directive, e.g. "positive and cheerful"
    pub tone: String,

    /// Natural-language blend of the top labels,
    /// e.g. "a mix of joy, fear and surprise"
    pub blend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_construction() {
        let s = EmotionScore::new("joy", 0.8);
        assert_eq!(s.label, "joy");
        assert!((s.score - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = EmotionProfile {
            dominant: "joy".into(),
            top: vec![EmotionScore::new("joy", 0.8)],
            summary: "😊 Joy (0.80)".into(),
            tone: "positive and cheerful".into(),
            blend: "joy".into(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: EmotionProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.dominant, "joy");
        assert_eq!(parsed.top.len(), 1);
    }
}
