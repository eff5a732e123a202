//! Configuration Types
//!
//! One explicit configuration object, constructed at process start and
//! passed by reference into every collaborator. Credentials are plain
//! strings here so figment can merge them, but they are redacted from
//! `Debug` output, never serialized back out, and converted to
//! `SecretString` inside the clients that use them.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::network;
use crate::types::{Result, SyncError};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wiki.js backend settings
    pub wiki: WikiConfig,

    /// LLM oracle settings
    pub llm: LlmConfig,
}

impl Config {
    /// Validate configuration values. Returns `SyncError::Config` on the
    /// first violation; called once at startup so a bad environment fails
    /// before any article processing begins.
    pub fn validate(&self) -> Result<()> {
        if self.wiki.graphql_url.is_empty() {
            return Err(SyncError::Config(
                "Wiki.js GraphQL URL is not set. Set WIKIJS_GRAPHQL_URL or provide it in the \
                 legacy config file"
                    .to_string(),
            ));
        }

        Url::parse(&self.wiki.graphql_url).map_err(|e| {
            SyncError::Config(format!(
                "Wiki.js GraphQL URL '{}' is not a valid URL: {e}",
                self.wiki.graphql_url
            ))
        })?;

        if self.wiki.api_token.is_empty() {
            return Err(SyncError::Config(
                "Wiki.js API token is not set. Set WIKIJS_API_TOKEN or provide it in the legacy \
                 config file"
                    .to_string(),
            ));
        }

        if self.wiki.locale.is_empty() {
            return Err(SyncError::Config("Wiki.js locale must not be empty".to_string()));
        }

        if self.wiki.timeout_secs == 0 {
            return Err(SyncError::Config(
                "Wiki.js timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SyncError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(SyncError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Wiki.js Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Wiki.js GraphQL endpoint URL
    pub graphql_url: String,

    /// Bearer token for the GraphQL API. Never serialized to output.
    #[serde(skip_serializing)]
    pub api_token: String,

    /// Locale attached to every create/update call
    pub locale: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            graphql_url: String::new(),
            api_token: String::new(),
            locale: "zh-tw".to_string(),
            timeout_secs: network::DEFAULT_WIKI_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for WikiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiConfig")
            .field("graphql_url", &self.graphql_url)
            .field("api_token", &"[REDACTED]")
            .field("locale", &self.locale)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key for the oracle. Never serialized to output.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Temperature for generation (0.0 = deterministic)
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// API base URL (for custom endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Maximum tokens to generate per completion
    pub max_tokens: usize,

    /// Display language wiki content is written in; article text is
    /// translated into this language before analysis and generation.
    pub display_language: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.1,
            timeout_secs: network::DEFAULT_LLM_TIMEOUT_SECS,
            api_base: None,
            max_tokens: 4096,
            display_language: "Traditional Chinese (zh-TW)".to_string(),
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_base", &self.api_base)
            .field("max_tokens", &self.max_tokens)
            .field("display_language", &self.display_language)
            .finish()
    }
}
