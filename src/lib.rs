//! SciWeave - Science News to Wiki Knowledge Synchronizer
//!
//! Ingests a single science-news article, decomposes it into knowledge
//! topics with a language-model oracle, and synchronizes those topics as
//! pages in a remote Wiki.js instance - merging into existing pages where
//! the oracle judges them related instead of fragmenting knowledge across
//! near duplicates.
//!
//! ## Pipeline
//!
//! URL → extractor → article record → topic analysis → {similarity scoring
//! × page search} → merge decisions → {content generation × page
//! create/update} → aggregated report.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use sciweave::{ConfigLoader, OpenAiProvider, SyncService, WikiJsClient};
//!
//! let config = ConfigLoader::load()?;
//! let provider = Arc::new(OpenAiProvider::new(&config.llm)?);
//! let store = Arc::new(WikiJsClient::new(&config.wiki)?);
//! let service = SyncService::new(store, provider, &config)?;
//! let report = service.process_url(url).await?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: LLM provider abstraction and tolerant JSON extraction
//! - [`extract`]: ScienceDaily article fetching and parsing
//! - [`knowledge`]: topic analysis, translation, similarity, generation
//! - [`wiki`]: page-store trait and the Wiki.js GraphQL client
//! - [`sync`]: the synchronization orchestrator

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod extract;
pub mod knowledge;
pub mod sync;
pub mod types;
pub mod wiki;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, LlmConfig, WikiConfig};

// Error Types
pub use types::error::{Result, SyncError};

// Domain Types
pub use types::{
    ArticleRecord, ContentType, ExistingPage, MergeSuggestion, PageAction, PageProcessingResult,
    PreviewReport, SyncReport, TopicAnalysis,
};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use extract::ScienceDailyExtractor;
pub use sync::{SyncOptions, SyncService};

// =============================================================================
// AI Re-exports
// =============================================================================

pub use ai::{LlmProvider, OpenAiProvider, SharedProvider};

// =============================================================================
// Wiki Re-exports
// =============================================================================

pub use wiki::{PageStore, SharedStore, WikiJsClient};
