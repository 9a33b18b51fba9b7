//! Generation service layer for StudyForge.
//!
//! Builds prompts, calls the configured LLM provider, and decodes raw
//! responses into the typed drafts the views consume.

pub mod prompts;
pub mod providers;
pub mod service;

pub use providers::{GeminiProvider, MockProvider};
pub use service::ContentGenerator;
