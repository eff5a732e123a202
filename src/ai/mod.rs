//! AI Integration Layer
//!
//! Oracle access for the pipeline: the provider abstraction plus tolerant
//! JSON extraction from free-text responses.

pub mod json_extract;
pub mod provider;

pub use json_extract::{extract_json_array, extract_json_object, strip_code_fences};
pub use provider::{LlmProvider, OpenAiProvider, SharedProvider};
