//! Topic Analyzer
//!
//! Decomposes one article into the structured topic set the orchestrator
//! resolves into wiki pages. The analyzer itself is strict: if the oracle's
//! response cannot be decoded into a [`TopicAnalysis`] it fails loudly, and
//! the caller decides whether to degrade to [`TopicAnalysis::minimal`].

use tracing::debug;

use crate::ai::{SharedProvider, extract_json_object};
use crate::knowledge::prompts;
use crate::knowledge::translation::Translator;
use crate::types::{ArticleRecord, Result, SyncError, TopicAnalysis};

pub struct TopicAnalyzer {
    provider: SharedProvider,
    translator: Translator,
}

impl TopicAnalyzer {
    pub fn new(provider: SharedProvider, translator: Translator) -> Self {
        Self {
            provider,
            translator,
        }
    }

    /// Analyze an article into concepts, methods, applications, problems,
    /// a main topic and suggested tags.
    pub async fn analyze(&self, article: &ArticleRecord) -> Result<TopicAnalysis> {
        let translated = self.translator.translate(&article.full_story).await;
        let user = prompts::analysis_user(article, &translated);

        debug!(title = %article.title, "requesting topic analysis");
        let response = self
            .provider
            .complete(prompts::ANALYSIS_SYSTEM, &user)
            .await?;

        let value = extract_json_object(&response)?;
        let analysis: TopicAnalysis = serde_json::from_value(value)
            .map_err(|e| SyncError::AnalysisDecode(format!("unexpected analysis shape: {e}")))?;

        Ok(analysis)
    }
}
