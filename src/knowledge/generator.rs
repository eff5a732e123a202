//! Wiki Content Generator
//!
//! Produces the Markdown body for one wiki entry. Two paths: creating a
//! fresh entry, or revising an existing one by integrating the new
//! article. Both require per-sentence citation markers and an APA-style
//! References section via prompting; the oracle's text is trusted as-is,
//! so a response that skips the markers yields a lower-quality page rather
//! than an error.

use tracing::debug;

use crate::ai::SharedProvider;
use crate::knowledge::prompts;
use crate::knowledge::translation::Translator;
use crate::types::{ArticleRecord, ContentType, Result};

pub struct ContentGenerator {
    provider: SharedProvider,
    translator: Translator,
}

impl ContentGenerator {
    pub fn new(provider: SharedProvider, translator: Translator) -> Self {
        Self {
            provider,
            translator,
        }
    }

    /// Generate the full Markdown body for `topic`. A non-empty
    /// `existing_content` switches to the update path, which returns the
    /// complete revised document (full replacement, not a diff).
    pub async fn generate(
        &self,
        article: &ArticleRecord,
        content_type: ContentType,
        topic: &str,
        existing_content: &str,
    ) -> Result<String> {
        let translated = self.translator.translate(&article.full_story).await;

        let (system, user) = if existing_content.is_empty() {
            (
                prompts::generation_create_system(content_type, topic),
                prompts::generation_create_user(article, &translated),
            )
        } else {
            (
                prompts::generation_update_system(content_type, topic),
                prompts::generation_update_user(existing_content, article, &translated),
            )
        };

        debug!(%topic, %content_type, update = !existing_content.is_empty(), "generating wiki content");
        self.provider.complete(&system, &user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::LlmProvider;
    use crate::types::SyncError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Echoes a body derived from the prompts it receives, so tests can
    /// tell which path was taken.
    struct EchoProvider {
        seen_systems: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmProvider for EchoProvider {
        async fn complete(&self, system: &str, _user: &str) -> Result<String> {
            self.seen_systems.lock().unwrap().push(system.to_string());
            if system.starts_with("Translate") {
                return Ok("translated story".to_string());
            }
            if system.starts_with("Update") {
                return Ok("# Revised\n\nIntegrated. [1]".to_string());
            }
            Ok("# Fresh entry\n\nA sentence. [1]\n\n## References\n\n[1] Example. (2025).".to_string())
        }

        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-model"
        }
    }

    fn generator() -> (ContentGenerator, Arc<EchoProvider>) {
        let provider = Arc::new(EchoProvider {
            seen_systems: Mutex::new(Vec::new()),
        });
        let shared: SharedProvider = provider.clone();
        let translator = Translator::new(shared.clone(), "Traditional Chinese (zh-TW)");
        (ContentGenerator::new(shared, translator), provider)
    }

    fn article() -> ArticleRecord {
        ArticleRecord {
            title: "T".into(),
            full_story: "story".into(),
            ..ArticleRecord::default()
        }
    }

    #[tokio::test]
    async fn test_create_path_when_no_existing_content() {
        let (generator, provider) = generator();
        let body = generator
            .generate(&article(), ContentType::Concept, "Superabsorption", "")
            .await
            .unwrap();

        assert!(body.starts_with("# Fresh entry"));
        let systems = provider.seen_systems.lock().unwrap();
        assert!(systems.iter().any(|s| s.starts_with("Write a wiki entry")));
    }

    #[tokio::test]
    async fn test_update_path_when_existing_content() {
        let (generator, provider) = generator();
        let body = generator
            .generate(&article(), ContentType::Main, "Quantum Batteries", "# Old entry")
            .await
            .unwrap();

        assert!(body.starts_with("# Revised"));
        let systems = provider.seen_systems.lock().unwrap();
        assert!(systems.iter().any(|s| s.starts_with("Update an existing")));
    }

    #[tokio::test]
    async fn test_generate_then_regenerate_round_trip() {
        let (generator, _) = generator();
        let first = generator
            .generate(&article(), ContentType::Main, "Quantum Batteries", "")
            .await
            .unwrap();
        assert!(!first.is_empty());

        let second = generator
            .generate(&article(), ContentType::Main, "Quantum Batteries", &first)
            .await
            .unwrap();
        assert!(!second.is_empty());
    }
}
