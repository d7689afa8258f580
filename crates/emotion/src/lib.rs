//! # Attune Emotion
//!
//! The Emotion Profiler: turns a raw classifier distribution into a ranked
//! `EmotionProfile` — top labels, readable summary, a response tone
//! directive, and a natural-language blend description.

pub mod lexicon;
pub mod profiler;

pub use profiler::EmotionProfiler;
