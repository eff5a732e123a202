//! Wiki Page Store
//!
//! The narrow interface the orchestrator sees for the remote wiki: search,
//! read, create, update. Pages are externally owned; nothing here ever
//! deletes one. The trait exists so the synchronization logic can be
//! exercised against an in-memory store in tests.

mod client;

pub use client::WikiJsClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::{ExistingPage, PageContent, Result};

/// Shared page-store handle
pub type SharedStore = Arc<dyn PageStore>;

/// Fields for creating a new page
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub title: String,
    pub content: String,
    pub path: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// Fields for updating an existing page
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Backend acknowledgement for a create/update mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponse {
    pub succeeded: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Remote document store holding wiki pages, addressed by numeric id and
/// hierarchical path.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Search pages by a free-text term. Empty result means no matches;
    /// transport or backend failures are errors.
    async fn search(&self, term: &str) -> Result<Vec<ExistingPage>>;

    /// Read one page by id; `None` when it does not exist.
    async fn read(&self, id: i64) -> Result<Option<PageContent>>;

    /// Create a new page.
    async fn create(&self, page: NewPage) -> Result<StoreResponse>;

    /// Replace an existing page's content.
    async fn update(&self, update: PageUpdate) -> Result<StoreResponse>;
}
