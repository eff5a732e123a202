//! Translation Service
//!
//! Translates article text into the configured display language before
//! analysis and generation. Stateless and deliberately forgiving: any
//! oracle failure returns the original text unchanged, because an
//! untranslated article is still processable while an aborted run is not.

use tracing::warn;

use crate::ai::SharedProvider;
use crate::knowledge::prompts;

#[derive(Clone)]
pub struct Translator {
    provider: SharedProvider,
    language: String,
}

impl Translator {
    pub fn new(provider: SharedProvider, language: impl Into<String>) -> Self {
        Self {
            provider,
            language: language.into(),
        }
    }

    /// Translate `text` into the target language, passing blank input (and
    /// any failure) through untouched.
    pub async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let system = prompts::translation_system(&self.language);
        let user = prompts::translation_user(text);

        match self.provider.complete(&system, &user).await {
            Ok(translated) => translated.trim().to_string(),
            Err(e) => {
                warn!("translation failed, keeping original text: {e}");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::LlmProvider;
    use crate::types::{Result, SyncError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedProvider {
        response: Result<&'static str>,
    }

    #[async_trait]
    impl LlmProvider for FixedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.to_string()),
                Err(_) => Err(SyncError::LlmApi("offline".to_string())),
            }
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn model(&self) -> &str {
            "fixed-model"
        }
    }

    #[tokio::test]
    async fn test_translates_via_provider() {
        let translator = Translator::new(
            Arc::new(FixedProvider {
                response: Ok("翻譯後的文字"),
            }),
            "Traditional Chinese (zh-TW)",
        );
        assert_eq!(translator.translate("source text").await, "翻譯後的文字");
    }

    #[tokio::test]
    async fn test_failure_returns_original() {
        let translator = Translator::new(
            Arc::new(FixedProvider {
                response: Err(SyncError::LlmApi("offline".to_string())),
            }),
            "Traditional Chinese (zh-TW)",
        );
        assert_eq!(translator.translate("source text").await, "source text");
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        // Provider would fail, but blank input must never reach it
        let translator = Translator::new(
            Arc::new(FixedProvider {
                response: Err(SyncError::LlmApi("offline".to_string())),
            }),
            "Traditional Chinese (zh-TW)",
        );
        assert_eq!(translator.translate("   ").await, "   ");
    }
}
