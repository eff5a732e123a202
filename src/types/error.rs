//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **Retrieval / ArticleStructure**: the article could not be fetched or
//!   parsed - fatal to the run
//! - **AnalysisDecode**: the oracle's topic analysis could not be decoded -
//!   fatal in strict mode, degraded to a minimal analysis otherwise
//! - **LlmApi**: transport or API failure talking to the oracle
//! - **Store**: transport or GraphQL failure talking to the wiki backend
//! - **Config**: invalid or incomplete configuration - fatal at startup
//!
//! Similarity-scoring and translation failures are recovered locally by
//! their components and never reach this type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Extraction Errors
    // -------------------------------------------------------------------------
    /// The article page could not be fetched (network or HTTP status)
    #[error("failed to retrieve article from {url}: {reason}")]
    Retrieval { url: String, reason: String },

    /// The fetched document is missing required structure (e.g. no title)
    #[error("unrecognized article structure at {url}: {reason}")]
    ArticleStructure { url: String, reason: String },

    // -------------------------------------------------------------------------
    // Oracle Errors
    // -------------------------------------------------------------------------
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// The oracle's response did not contain a decodable topic analysis
    #[error("could not decode topic analysis: {0}")]
    AnalysisDecode(String),

    // -------------------------------------------------------------------------
    // Wiki Store Errors
    // -------------------------------------------------------------------------
    #[error("wiki store error: {0}")]
    Store(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("config error: {0}")]
    Config(String),
}

impl SyncError {
    /// Create a retrieval error
    pub fn retrieval(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Retrieval {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an article-structure error
    pub fn structure(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArticleStructure {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error aborts the whole run (as opposed to a single page)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Retrieval { .. } | Self::ArticleStructure { .. } | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
