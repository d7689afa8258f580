//! # Attune Core
//!
//! Domain types, traits, and error definitions for the Attune emotion-aware
//! chat engine. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator (emotion classifier, chat model, system
//! telemetry, weather source) is defined as a trait here. Implementations
//! live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod chat;
pub mod classifier;
pub mod emotion;
pub mod error;
pub mod message;
pub mod snapshot;
pub mod telemetry;

// Re-export key types at crate root for ergonomics
pub use chat::{ChatProvider, ChatRequest, ChatResponse};
pub use classifier::Classifier;
pub use emotion::{EmotionProfile, EmotionScore};
pub use error::{ChatError, ClassifierError, Error, Result, TelemetryError};
pub use message::{Role, Turn};
pub use snapshot::{ContextSnapshot, DayPart};
pub use telemetry::{SystemProbe, WeatherSource};
