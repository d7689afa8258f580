//! # Attune Engine
//!
//! The Prompt Assembler / Reply Orchestrator and the conversation log it
//! exclusively owns. `ChatEngine::respond` is the single public entry
//! point the surrounding interface calls.

pub mod engine;
pub mod history;
pub mod prompt;

pub use engine::ChatEngine;
pub use history::ConversationLog;
