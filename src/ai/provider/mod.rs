//! LLM Provider Abstraction
//!
//! Defines the LlmProvider trait all oracle calls go through. The pipeline
//! only ever needs plain text completions: callers that expect JSON run the
//! tolerant extractors in [`crate::ai::json_extract`] over the returned
//! text rather than trusting the oracle to honor an output schema.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::types::Result;

/// Shared LLM provider handle passed into every component that prompts the
/// oracle. Collaborators are constructed per run; the Arc only exists so
/// tests can substitute a mock.
pub type SharedProvider = Arc<dyn LlmProvider>;

/// LLM provider trait for free-text completion
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a system + user prompt pair and return the raw text response.
    ///
    /// No output schema is guaranteed beyond best-effort prompting.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}
