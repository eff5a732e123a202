//! Merge Similarity Advisor
//!
//! Scores candidate existing pages against a new topic so the orchestrator
//! can merge related knowledge instead of fragmenting it across near
//! duplicate pages. The oracle's tier rubric (0.8 merge / 0.5 consider) is
//! prompt guidance only; the one rule enforced here is the surfacing
//! filter: suggestions at or below [`merge::SUGGESTION_THRESHOLD`] are
//! discarded no matter what the oracle claims.
//!
//! This component never fails: any oracle or parse problem degrades to an
//! empty suggestion list, which downstream means "create a new page".

use serde::Deserialize;
use tracing::warn;

use crate::ai::{SharedProvider, extract_json_array};
use crate::constants::merge;
use crate::knowledge::prompts;
use crate::types::{ExistingPage, MergeSuggestion};

pub struct SimilarityAdvisor {
    provider: SharedProvider,
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    page_title: String,
    similarity_score: f64,
}

impl SimilarityAdvisor {
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Score up to the first [`merge::MAX_CANDIDATES`] candidates against
    /// `new_topic`, keeping only suggestions above the surfacing threshold.
    pub async fn suggest_merges(
        &self,
        new_topic: &str,
        candidates: &[ExistingPage],
    ) -> Vec<MergeSuggestion> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let titles: Vec<&str> = candidates
            .iter()
            .take(merge::MAX_CANDIDATES)
            .map(|page| page.title.as_str())
            .collect();

        let user = prompts::similarity_user(new_topic, &titles);
        let response = match self
            .provider
            .complete(prompts::SIMILARITY_SYSTEM, &user)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("similarity scoring failed, continuing without suggestions: {e}");
                return Vec::new();
            }
        };

        let raw: Vec<RawSuggestion> = match extract_json_array(&response)
            .and_then(|value| serde_json::from_value(value).map_err(Into::into))
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not decode similarity scores, continuing without suggestions: {e}");
                return Vec::new();
            }
        };

        raw.into_iter()
            .filter(|s| s.similarity_score > merge::SUGGESTION_THRESHOLD)
            .map(|s| MergeSuggestion {
                page_title: s.page_title,
                similarity_score: s.similarity_score,
            })
            .collect()
    }
}
