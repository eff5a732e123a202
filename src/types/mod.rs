//! Core Domain Types
//!
//! Shared data model for the extraction → analysis → synchronization
//! pipeline. Everything here is plain owned data; collaborators exchange
//! these types by value and never share mutable state.

pub mod error;

pub use error::{Result, SyncError};

use serde::{Deserialize, Serialize};

// =============================================================================
// Article Record
// =============================================================================

/// Structured fields extracted from one science-news article.
///
/// Produced once per run and immutable afterwards. Every field except
/// `title` may be empty; an empty string is the "not found" value for an
/// individual field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub date: String,
    pub source: String,
    pub summary: String,
    pub full_story: String,
    pub url: String,
}

// =============================================================================
// Topic Analysis
// =============================================================================

/// Knowledge structure the oracle extracts from one article.
///
/// List order follows the oracle's output; duplicates are not removed at
/// this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicAnalysis {
    pub main_topic: String,
    pub concepts: Vec<String>,
    pub methods: Vec<String>,
    pub applications: Vec<String>,
    pub problems: Vec<String>,
    pub suggested_tags: Vec<String>,
}

impl TopicAnalysis {
    /// The sanctioned degraded analysis used when the oracle's output cannot
    /// be decoded and the caller runs in lenient mode: the article title
    /// becomes the main topic and no sub-topics are produced.
    pub fn minimal(title: &str) -> Self {
        Self {
            main_topic: title.to_string(),
            suggested_tags: vec!["science".to_string()],
            ..Self::default()
        }
    }
}

// =============================================================================
// Wiki Page Shapes
// =============================================================================

/// A page as returned by the store's search capability.
///
/// Wiki.js search results carry the page id as a string; it is parsed to a
/// numeric id only when a read or update actually needs one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingPage {
    pub id: String,
    pub title: String,
    pub path: String,
}

/// The fuller shape returned by the store's read capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub content: String,
}

// =============================================================================
// Merge Suggestion
// =============================================================================

/// One candidate page scored against a new topic.
///
/// Ephemeral: meaningful only within the topic-resolution attempt that
/// produced it, never cached or reused across topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSuggestion {
    pub page_title: String,
    pub similarity_score: f64,
}

// =============================================================================
// Content Type
// =============================================================================

/// The kind of wiki entry being produced for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Main,
    Concept,
    Method,
    Application,
}

impl ContentType {
    /// Stable lowercase form used in page paths, tags and prompts
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Concept => "concept",
            Self::Method => "method",
            Self::Application => "application",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Page Processing Result
// =============================================================================

/// Outcome of one attempted page operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAction {
    Created,
    Updated,
    Failed,
    Skipped,
}

/// One record per page operation attempted during a run.
///
/// A failed create or update still produces a record (with `success=false`
/// and the error text); it never aborts the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageProcessingResult {
    pub action: PageAction,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageProcessingResult {
    pub fn created(
        title: impl Into<String>,
        path: impl Into<String>,
        content_type: ContentType,
        success: bool,
        message: Option<String>,
    ) -> Self {
        Self {
            action: PageAction::Created,
            title: title.into(),
            path: Some(path.into()),
            content_type,
            success,
            message,
            error: None,
        }
    }

    pub fn updated(
        title: impl Into<String>,
        path: impl Into<String>,
        content_type: ContentType,
        success: bool,
        message: Option<String>,
    ) -> Self {
        Self {
            action: PageAction::Updated,
            title: title.into(),
            path: Some(path.into()),
            content_type,
            success,
            message,
            error: None,
        }
    }

    pub fn failed(
        title: impl Into<String>,
        content_type: ContentType,
        error: impl Into<String>,
    ) -> Self {
        Self {
            action: PageAction::Failed,
            title: title.into(),
            path: None,
            content_type,
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn skipped(title: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            action: PageAction::Skipped,
            title: title.into(),
            path: None,
            content_type,
            success: true,
            message: Some("empty topic".to_string()),
            error: None,
        }
    }
}

// =============================================================================
// Run Reports
// =============================================================================

/// Aggregated outcome of one synchronization run.
///
/// Per-page failures live inside `created`/`updated` records (or as
/// `Failed`/`Skipped` entries in `pages`); they do not make the run itself
/// an error. A run-level failure is a `SyncError` from the orchestrator
/// instead of a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub article: ArticleRecord,
    pub analysis: TopicAnalysis,
    pub merge_suggestions: Vec<MergeSuggestion>,
    /// Successfully-or-unsuccessfully attempted creations, in attempt order
    pub created: Vec<PageProcessingResult>,
    /// Attempted updates, in attempt order
    pub updated: Vec<PageProcessingResult>,
    /// Every result, including failed and skipped ones, in attempt order
    pub pages: Vec<PageProcessingResult>,
}

impl SyncReport {
    /// Number of page operations that did not succeed
    pub fn failure_count(&self) -> usize {
        self.pages.iter().filter(|p| !p.success).count()
    }
}

/// Result of a preview run: analysis without any writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewReport {
    pub article: ArticleRecord,
    pub analysis: TopicAnalysis,
    pub existing_pages: Vec<ExistingPage>,
    pub merge_suggestions: Vec<MergeSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_analysis() {
        let analysis = TopicAnalysis::minimal("Quantum Batteries");
        assert_eq!(analysis.main_topic, "Quantum Batteries");
        assert_eq!(analysis.suggested_tags, vec!["science"]);
        assert!(analysis.concepts.is_empty());
        assert!(analysis.methods.is_empty());
        assert!(analysis.applications.is_empty());
        assert!(analysis.problems.is_empty());
    }

    #[test]
    fn test_content_type_tag() {
        assert_eq!(ContentType::Main.tag(), "main");
        assert_eq!(ContentType::Concept.to_string(), "concept");
        assert_eq!(ContentType::Method.tag(), "method");
        assert_eq!(ContentType::Application.tag(), "application");
    }

    #[test]
    fn test_result_serialization_shape() {
        let result = PageProcessingResult::failed("CRISPR", ContentType::Concept, "boom");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["action"], "failed");
        assert_eq!(value["type"], "concept");
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert!(value.get("path").is_none());
    }

    #[test]
    fn test_failure_count() {
        let ok = PageProcessingResult::created("A", "science/main/A", ContentType::Main, true, None);
        let bad = PageProcessingResult::failed("B", ContentType::Concept, "store down");
        let report = SyncReport {
            article: ArticleRecord::default(),
            analysis: TopicAnalysis::default(),
            merge_suggestions: vec![],
            created: vec![ok.clone()],
            updated: vec![],
            pages: vec![ok, bad],
        };
        assert_eq!(report.failure_count(), 1);
    }
}
