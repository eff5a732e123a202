//! Knowledge Processing Layer
//!
//! Oracle-backed components that turn one article into wiki content:
//! topic analysis, translation, merge-similarity scoring and Markdown
//! generation. All of them are thin over [`crate::ai::LlmProvider`]; the
//! decisions about what to do with their output live in [`crate::sync`].

pub mod analyzer;
pub mod generator;
pub mod prompts;
pub mod similarity;
pub mod translation;

pub use analyzer::TopicAnalyzer;
pub use generator::ContentGenerator;
pub use similarity::SimilarityAdvisor;
pub use translation::Translator;
