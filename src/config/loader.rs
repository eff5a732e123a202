//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Legacy JSON config file (`config.json`, fields nested under "wiki.js")
//! 3. Environment variables (WIKIJS_* / OPENAI_*)
//!
//! Environment wins over the file; the file exists only for installations
//! that predate the environment-variable surface.

use figment::{Figment, providers::Serialized};
use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::types::{Result, SyncError};

/// Legacy config file consulted when environment variables are absent
pub const LEGACY_CONFIG_FILE: &str = "config.json";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → legacy file → environment.
    pub fn load() -> Result<Config> {
        Self::load_from(Path::new(LEGACY_CONFIG_FILE))
    }

    /// Load configuration resolving the legacy file at an explicit path.
    pub fn load_from(legacy_path: &Path) -> Result<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if legacy_path.exists() {
            debug!("loading legacy config from: {}", legacy_path.display());
            let legacy = LegacyConfig::read(legacy_path)?;
            figment = figment.merge(Serialized::defaults(legacy.into_overlay()));
        }

        figment = figment.merge(Serialized::defaults(ConfigOverlay::from_env()?));

        let config: Config = figment
            .extract()
            .map_err(|e| SyncError::Config(format!("configuration error: {e}")))?;

        config.validate()?;

        Ok(config)
    }
}

// =============================================================================
// Environment Overlay
// =============================================================================

/// Partial configuration read from the process environment. Only keys that
/// are actually set are serialized, so merging touches nothing else.
#[derive(Debug, Default, serde::Serialize)]
struct ConfigOverlay {
    wiki: WikiOverlay,
    llm: LlmOverlay,
}

#[derive(Debug, Default, serde::Serialize)]
struct WikiOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    graphql_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, serde::Serialize)]
struct LlmOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

impl ConfigOverlay {
    fn from_env() -> Result<Self> {
        let timeout_secs = match env::var("WIKIJS_TIMEOUT") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                SyncError::Config(format!(
                    "WIKIJS_TIMEOUT must be a whole number of seconds, got '{raw}'"
                ))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            wiki: WikiOverlay {
                graphql_url: env::var("WIKIJS_GRAPHQL_URL").ok(),
                api_token: env::var("WIKIJS_API_TOKEN").ok(),
                locale: env::var("WIKIJS_LOCALE").ok().map(|l| l.to_lowercase()),
                timeout_secs,
            },
            llm: LlmOverlay {
                api_key: env::var("OPENAI_API_KEY").ok(),
                model: env::var("OPENAI_MODEL").ok(),
            },
        })
    }
}

// =============================================================================
// Legacy Config File
// =============================================================================

/// Shape of the historical `config.json`: the Wiki.js settings live under a
/// literal "wiki.js" key with field names that predate this tool.
#[derive(Debug, serde::Deserialize)]
struct LegacyConfig {
    #[serde(rename = "wiki.js")]
    wiki: LegacyWikiSection,
}

#[derive(Debug, serde::Deserialize)]
struct LegacyWikiSection {
    graphql_url: Option<String>,
    api: Option<String>,
    locale: Option<String>,
    timeout: Option<u64>,
}

impl LegacyConfig {
    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            SyncError::Config(format!(
                "legacy config file {} is not valid: {e}",
                path.display()
            ))
        })
    }

    fn into_overlay(self) -> ConfigOverlay {
        ConfigOverlay {
            wiki: WikiOverlay {
                graphql_url: self.wiki.graphql_url,
                api_token: self.wiki.api,
                locale: self.wiki.locale.map(|l| l.to_lowercase()),
                timeout_secs: self.wiki.timeout,
            },
            llm: LlmOverlay::default(),
        }
    }
}
