//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Merge policy constants
pub mod merge {
    /// Minimum oracle relevance score for a candidate page to surface as a
    /// merge suggestion at all. Raising this suppresses useful suggestions;
    /// scores at or below it are discarded regardless of what the oracle
    /// claims.
    pub const SUGGESTION_THRESHOLD: f64 = 0.5;

    /// Score at or above which the main topic is merged into an existing
    /// page instead of creating a new one. Lowering this increases the risk
    /// of merging unrelated topics into the same page.
    pub const AUTO_MERGE_THRESHOLD: f64 = 0.8;

    /// At most this many candidate titles are presented to the oracle per
    /// scoring call, in arrival order.
    pub const MAX_CANDIDATES: usize = 10;
}

/// Wiki page layout constants
pub mod wiki {
    /// Root path segment for every page this tool manages
    pub const PATH_ROOT: &str = "science";

    /// Default tag attached to sub-topic pages alongside the content type
    pub const DEFAULT_SUBTOPIC_TAG: &str = "science research";
}

/// Article source constants
pub mod source {
    /// Expected URL prefix for ScienceDaily articles; other URLs require
    /// interactive confirmation.
    pub const SCIENCEDAILY_PREFIX: &str = "https://www.sciencedaily.com/";

    /// Timeout for fetching the article page (seconds)
    pub const FETCH_TIMEOUT_SECS: u64 = 30;
}

/// HTTP/Network constants
pub mod network {
    /// Default Wiki.js GraphQL request timeout (seconds)
    pub const DEFAULT_WIKI_TIMEOUT_SECS: u64 = 5;

    /// Default LLM request timeout (seconds)
    pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 300;
}
