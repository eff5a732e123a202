//! Wiki.js GraphQL Client
//!
//! Implements [`PageStore`] against the Wiki.js GraphQL API: bearer
//! authentication, the configured locale on every mutation, and a short
//! request timeout so a stuck wiki cannot hang the pipeline for long.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

use super::{NewPage, PageStore, PageUpdate, StoreResponse};
use crate::config::WikiConfig;
use crate::types::{ExistingPage, PageContent, Result, SyncError};

const SEARCH_QUERY: &str = "\
query SearchPages($term: String!) {
  pages {
    search(query: $term) {
      results {
        id
        title
        path
      }
    }
  }
}";

const READ_QUERY: &str = "\
query PageContent($id: Int!) {
  pages {
    single(id: $id) {
      title
      content
    }
  }
}";

const CREATE_MUTATION: &str = "\
mutation CreatePage($title: String!, $content: String!, $path: String!, $tags: [String!]!, $description: String!, $locale: String!) {
  pages {
    create(
      title: $title
      content: $content
      path: $path
      tags: $tags
      description: $description
      editor: \"markdown\"
      locale: $locale
      isPublished: true
      isPrivate: false
    ) {
      responseResult {
        succeeded
        errorCode
        slug
        message
      }
    }
  }
}";

const UPDATE_MUTATION: &str = "\
mutation UpdatePage($id: Int!, $title: String!, $content: String!, $tags: [String!]!, $locale: String!) {
  pages {
    update(
      id: $id
      title: $title
      content: $content
      tags: $tags
      editor: \"markdown\"
      locale: $locale
      isPublished: true
    ) {
      responseResult {
        succeeded
        errorCode
        slug
        message
      }
    }
  }
}";

pub struct WikiJsClient {
    endpoint: String,
    api_token: SecretString,
    locale: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for WikiJsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiJsClient")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"[REDACTED]")
            .field("locale", &self.locale)
            .finish()
    }
}

impl WikiJsClient {
    pub fn new(config: &WikiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SyncError::Store(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.graphql_url.clone(),
            api_token: SecretString::from(config.api_token.clone()),
            locale: config.locale.clone(),
            client,
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<GraphQlResponse<T>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_token.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| SyncError::Store(format!("request to wiki failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::Store(format!("HTTP {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::Store(format!("invalid GraphQL response: {e}")))
    }
}

#[async_trait]
impl PageStore for WikiJsClient {
    async fn search(&self, term: &str) -> Result<Vec<ExistingPage>> {
        debug!(%term, "searching wiki pages");
        let body: GraphQlResponse<SearchData> =
            self.post(SEARCH_QUERY, json!({ "term": term })).await?;

        if let Some(data) = body.data {
            let results = data.pages.search.results;
            if !results.is_empty() {
                return Ok(results);
            }
        }

        if let Some(errors) = body.errors {
            return Err(SyncError::Store(format!(
                "GraphQL errors: {}",
                join_errors(&errors)
            )));
        }

        Ok(Vec::new())
    }

    async fn read(&self, id: i64) -> Result<Option<PageContent>> {
        let body: GraphQlResponse<ReadData> = self.post(READ_QUERY, json!({ "id": id })).await?;

        if let Some(page) = body.data.and_then(|data| data.pages.single) {
            return Ok(Some(page));
        }

        if let Some(errors) = body.errors {
            warn!("reading page {id} failed: {}", join_errors(&errors));
        }
        Ok(None)
    }

    async fn create(&self, page: NewPage) -> Result<StoreResponse> {
        debug!(title = %page.title, path = %page.path, "creating wiki page");
        let variables = json!({
            "title": page.title,
            "content": page.content,
            "path": page.path,
            "tags": page.tags,
            "description": page.description,
            "locale": self.locale,
        });

        let body: GraphQlResponse<CreateData> = self.post(CREATE_MUTATION, variables).await?;
        unwrap_mutation(body.data.map(|d| d.pages.create.response_result), body.errors)
    }

    async fn update(&self, update: PageUpdate) -> Result<StoreResponse> {
        debug!(id = update.id, title = %update.title, "updating wiki page");
        let variables = json!({
            "id": update.id,
            "title": update.title,
            "content": update.content,
            "tags": update.tags,
            "locale": self.locale,
        });

        let body: GraphQlResponse<UpdateData> = self.post(UPDATE_MUTATION, variables).await?;
        unwrap_mutation(body.data.map(|d| d.pages.update.response_result), body.errors)
    }
}

fn unwrap_mutation(
    result: Option<StoreResponse>,
    errors: Option<Vec<GraphQlError>>,
) -> Result<StoreResponse> {
    match result {
        Some(response) => Ok(response),
        None => match errors {
            Some(errors) => Err(SyncError::Store(format!(
                "GraphQL errors: {}",
                join_errors(&errors)
            ))),
            None => Err(SyncError::Store("unknown wiki error".to_string())),
        },
    }
}

fn join_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// Response envelope types

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    pages: SearchPages,
}

#[derive(Debug, Deserialize)]
struct SearchPages {
    search: SearchResults,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    results: Vec<ExistingPage>,
}

#[derive(Debug, Deserialize)]
struct ReadData {
    pages: ReadPages,
}

#[derive(Debug, Deserialize)]
struct ReadPages {
    single: Option<PageContent>,
}

#[derive(Debug, Deserialize)]
struct CreateData {
    pages: CreatePages,
}

#[derive(Debug, Deserialize)]
struct CreatePages {
    create: MutationEnvelope,
}

#[derive(Debug, Deserialize)]
struct UpdateData {
    pages: UpdatePages,
}

#[derive(Debug, Deserialize)]
struct UpdatePages {
    update: MutationEnvelope,
}

#[derive(Debug, Deserialize)]
struct MutationEnvelope {
    #[serde(rename = "responseResult")]
    response_result: StoreResponse,
}
