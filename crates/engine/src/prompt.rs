//! Prompt assembly — blends the context sentence and emotion profile with
//! the literal user text into the instruction-augmented prompt stored as
//! the user turn.

use attune_core::emotion::EmotionProfile;

/// Compose the outbound prompt for one user message.
///
/// Contains, in order: the context sentence, the blend sentence, the
/// emotion summary, the tone + acknowledge instruction, and the verbatim
/// user text.
pub fn compose(context_sentence: &str, profile: &EmotionProfile, user_text: &str) -> String {
    format!(
        "{context_sentence}\n\
         The user's emotions appear to be {blend}.\n\
         Detected emotional tones: {summary}.\n\
         Respond empathetically in a {tone} tone. \
         Acknowledge and address each of these emotions respectfully before answering.\n\n\
         User: {user_text}",
        blend = profile.blend,
        summary = profile.summary,
        tone = profile.tone,
    )
}
