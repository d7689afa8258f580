//! Error types for the Attune domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Attune operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Classifier errors ---
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    // --- Chat service errors ---
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    // --- Telemetry errors (normally absorbed before reaching here) ---
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures from the emotion classification collaborator.
///
/// Never locally recovered: a turn that cannot be profiled is surfaced to
/// the caller, and the conversation log is left untouched.
#[derive(Debug, Clone, Error)]
pub enum ClassifierError {
    #[error("Classification request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Classifier returned no labels for non-empty input")]
    EmptyDistribution,

    #[error("Classifier model not found: {0}")]
    ModelNotFound(String),

    #[error("Classifier not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures from the chat-completion collaborator.
///
/// Recoverable at the caller: the orchestrator rolls back the in-flight
/// user turn and surfaces the error, never fabricating a reply.
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("Chat request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by chat service, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Chat model not found: {0}")]
    ModelNotFound(String),

    #[error("Chat provider not configured: {0}")]
    NotConfigured(String),

    #[error("Chat response was empty")]
    EmptyReply,

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures from ambient telemetry (weather fetch, battery read).
///
/// Always absorbed inside the context provider with fixed fallbacks;
/// callers of `snapshot()` never see these.
#[derive(Debug, Clone, Error)]
pub enum TelemetryError {
    #[error("Weather fetch failed: {0}")]
    WeatherFetch(String),

    #[error("Weather fetch timed out after {timeout_ms}ms")]
    WeatherTimeout { timeout_ms: u64 },

    #[error("Sensor read failed: {0}")]
    Sensor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_error_displays_correctly() {
        let err = Error::Chat(ChatError::ApiError {
            status_code: 503,
            message: "model loading".into(),
        });
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("model loading"));
    }

    #[test]
    fn classifier_error_displays_correctly() {
        let err = Error::Classifier(ClassifierError::EmptyDistribution);
        assert!(err.to_string().contains("no labels"));
    }

    #[test]
    fn telemetry_error_displays_correctly() {
        let err = TelemetryError::WeatherTimeout { timeout_ms: 2000 };
        assert!(err.to_string().contains("2000"));
    }
}
