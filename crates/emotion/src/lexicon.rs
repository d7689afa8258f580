//! Fixed emotion lexicon: label → emoji and label → response tone.
//!
//! Labels follow the go_emotions vocabulary. Both lookups are total:
//! unknown labels fall back to a default glyph / a neutral tone, so every
//! possible dominant label yields a usable directive.

/// Default tone for labels without a dedicated entry.
pub const DEFAULT_TONE: &str = "neutral and thoughtful";

/// Default glyph for labels without a dedicated emoji.
pub const DEFAULT_EMOJI: &str = "🤔";

/// Emoji used when rendering a label in the emotion summary.
pub fn emoji_for(label: &str) -> &'static str {
    match label {
        "joy" => "😊",
        "sadness" => "😢",
        "anger" => "😠",
        "fear" => "😨",
        "love" => "❤️",
        "surprise" => "😲",
        "amusement" => "😂",
        "disappointment" => "😞",
        "curiosity" => "🤔",
        "gratitude" => "🙏",
        "admiration" => "🤩",
        "confusion" => "😕",
        _ => DEFAULT_EMOJI,
    }
}

/// Response tone directive for a dominant label.
pub fn tone_for(label: &str) -> &'static str {
    match label {
        "joy" => "positive and cheerful",
        "sadness" => "gentle and comforting",
        "anger" => "calm and understanding",
        "fear" => "reassuring and supportive",
        "love" => "warm and affectionate",
        "surprise" => "excited but balanced",
        "disappointment" => "sympathetic and hopeful",
        "curiosity" => "informative and engaging",
        "gratitude" => "appreciative and friendly",
        "admiration" => "encouraging and uplifting",
        "amusement" => "light-hearted and fun",
        "confusion" => "clarifying and patient",
        _ => DEFAULT_TONE,
    }
}

/// Capitalize the first character of a label for display.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_have_entries() {
        assert_eq!(tone_for("joy"), "positive and cheerful");
        assert_eq!(emoji_for("joy"), "😊");
        assert_eq!(tone_for("confusion"), "clarifying and patient");
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(tone_for("nostalgia"), DEFAULT_TONE);
        assert_eq!(emoji_for("nostalgia"), DEFAULT_EMOJI);
        assert_eq!(tone_for(""), DEFAULT_TONE);
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("joy"), "Joy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
