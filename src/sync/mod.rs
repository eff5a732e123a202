//! Synchronization Orchestrator
//!
//! The control flow that ties extraction, analysis, similarity scoring and
//! content generation together: one run per article, strictly sequential,
//! deciding create-vs-merge-vs-update-vs-skip for the main topic and every
//! sub-topic.
//!
//! Two different merge policies are applied on purpose:
//! - the **main topic** goes through oracle-scored similarity with the
//!   [`merge::AUTO_MERGE_THRESHOLD`] gate, because the main entry is where
//!   fragmentation hurts the most;
//! - **sub-topics** use a cheap case-insensitive exact-title match against
//!   search results, trading precision for one fewer oracle call per topic.
//!
//! A run is atomic end-to-end: there is no retry or resume, and no
//! rollback. Failures inside a single page's create/update path become
//! `Failed` records; the run carries on with the next topic.

use tracing::{info, warn};

use crate::ai::SharedProvider;
use crate::config::Config;
use crate::constants::{merge, wiki};
use crate::extract::ScienceDailyExtractor;
use crate::knowledge::{ContentGenerator, SimilarityAdvisor, TopicAnalyzer, Translator};
use crate::types::{
    ArticleRecord, ContentType, ExistingPage, MergeSuggestion, PageAction, PageProcessingResult,
    PreviewReport, Result, SyncError, SyncReport, TopicAnalysis,
};
use crate::wiki::{NewPage, PageUpdate, SharedStore};

/// Per-run policy switches
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Only resolve the main topic; skip sub-topic resolution entirely
    pub main_only: bool,

    /// Treat an undecodable topic analysis as fatal instead of degrading
    /// to the minimal analysis
    pub strict_analysis: bool,
}

/// One-article synchronization service.
///
/// Constructed per invocation; collaborators are shared handles only so
/// tests can substitute them.
pub struct SyncService {
    extractor: ScienceDailyExtractor,
    store: SharedStore,
    analyzer: TopicAnalyzer,
    advisor: SimilarityAdvisor,
    generator: ContentGenerator,
    options: SyncOptions,
}

impl SyncService {
    pub fn new(store: SharedStore, provider: SharedProvider, config: &Config) -> Result<Self> {
        let translator = Translator::new(provider.clone(), config.llm.display_language.clone());

        Ok(Self {
            extractor: ScienceDailyExtractor::new()?,
            store,
            analyzer: TopicAnalyzer::new(provider.clone(), translator.clone()),
            advisor: SimilarityAdvisor::new(provider.clone()),
            generator: ContentGenerator::new(provider, translator),
            options: SyncOptions::default(),
        })
    }

    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Process one article URL end-to-end: extract, analyze, resolve the
    /// main topic, then every sub-topic.
    pub async fn process_url(&self, url: &str) -> Result<SyncReport> {
        info!(%url, "extracting article");
        let article = self.extractor.extract(url).await?;
        self.process_article(article).await
    }

    /// Process an already-extracted article.
    pub async fn process_article(&self, article: ArticleRecord) -> Result<SyncReport> {
        if article.title.is_empty() {
            return Err(SyncError::structure(&article.url, "article title is required"));
        }

        info!(title = %article.title, "analyzing knowledge structure");
        let analysis = self.analyze_with_policy(&article).await?;
        let main_topic = main_topic_of(&analysis, &article);

        let existing = match self.store.search(&main_topic).await {
            Ok(pages) => pages,
            Err(e) => {
                warn!("searching for '{main_topic}' failed, continuing without candidates: {e}");
                Vec::new()
            }
        };

        let merge_suggestions = self.advisor.suggest_merges(&main_topic, &existing).await;

        let mut pages = Vec::new();
        info!(%main_topic, "resolving main entry");
        pages.push(
            self.resolve_main(
                &article,
                &main_topic,
                analysis.suggested_tags.clone(),
                &existing,
                &merge_suggestions,
            )
            .await,
        );

        if !self.options.main_only {
            info!("resolving sub-topic entries");
            let subtopics = [
                (ContentType::Concept, &analysis.concepts),
                (ContentType::Method, &analysis.methods),
                (ContentType::Application, &analysis.applications),
            ];
            for (content_type, topics) in subtopics {
                for topic in topics {
                    pages.push(self.resolve_subtopic(&article, content_type, topic).await);
                }
            }
        }

        let created = bucket(&pages, PageAction::Created);
        let updated = bucket(&pages, PageAction::Updated);

        Ok(SyncReport {
            article,
            analysis,
            merge_suggestions,
            created,
            updated,
            pages,
        })
    }

    /// Analyze the article and search for related pages without writing
    /// anything to the store.
    pub async fn preview(&self, url: &str) -> Result<PreviewReport> {
        let article = self.extractor.extract(url).await?;
        let analysis = self.analyze_with_policy(&article).await?;
        let main_topic = main_topic_of(&analysis, &article);

        let existing_pages = self.store.search(&main_topic).await?;
        let merge_suggestions = self.advisor.suggest_merges(&main_topic, &existing_pages).await;

        Ok(PreviewReport {
            article,
            analysis,
            existing_pages,
            merge_suggestions,
        })
    }

    async fn analyze_with_policy(&self, article: &ArticleRecord) -> Result<TopicAnalysis> {
        match self.analyzer.analyze(article).await {
            Err(SyncError::AnalysisDecode(reason)) if !self.options.strict_analysis => {
                warn!("topic analysis undecodable, degrading to minimal analysis: {reason}");
                Ok(TopicAnalysis::minimal(&article.title))
            }
            other => other,
        }
    }

    /// Resolve the main topic: merge into the best-scoring existing page
    /// when the oracle is confident enough and the page is actually among
    /// the search results, otherwise create a new page.
    async fn resolve_main(
        &self,
        article: &ArticleRecord,
        main_topic: &str,
        tags: Vec<String>,
        existing: &[ExistingPage],
        suggestions: &[MergeSuggestion],
    ) -> PageProcessingResult {
        // First maximal element wins ties
        let best = suggestions.iter().reduce(|best, candidate| {
            if candidate.similarity_score > best.similarity_score {
                candidate
            } else {
                best
            }
        });

        if let Some(best) = best
            && best.similarity_score >= merge::AUTO_MERGE_THRESHOLD
            && let Some(page) = existing.iter().find(|p| p.title == best.page_title)
        {
            return self
                .update_page(article, page, ContentType::Main, main_topic)
                .await;
        }

        self.create_page(article, ContentType::Main, main_topic, Some(tags))
            .await
    }

    /// Resolve one sub-topic: skip blanks, update on a case-insensitive
    /// exact title match, create otherwise.
    async fn resolve_subtopic(
        &self,
        article: &ArticleRecord,
        content_type: ContentType,
        topic: &str,
    ) -> PageProcessingResult {
        if topic.trim().is_empty() {
            return PageProcessingResult::skipped(topic, content_type);
        }

        let pages = match self.store.search(topic).await {
            Ok(pages) => pages,
            Err(e) => return PageProcessingResult::failed(topic, content_type, e.to_string()),
        };

        if let Some(page) = pages
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(topic))
        {
            return self.update_page(article, page, content_type, topic).await;
        }

        self.create_page(article, content_type, topic, None).await
    }

    async fn create_page(
        &self,
        article: &ArticleRecord,
        content_type: ContentType,
        topic: &str,
        tags: Option<Vec<String>>,
    ) -> PageProcessingResult {
        match self.try_create(article, content_type, topic, tags).await {
            Ok(result) => result,
            Err(e) => PageProcessingResult::failed(topic, content_type, e.to_string()),
        }
    }

    async fn try_create(
        &self,
        article: &ArticleRecord,
        content_type: ContentType,
        topic: &str,
        tags: Option<Vec<String>>,
    ) -> Result<PageProcessingResult> {
        let content = self
            .generator
            .generate(article, content_type, topic, "")
            .await?;

        let path = page_path(content_type, topic);
        let tags = tags.filter(|t| !t.is_empty()).unwrap_or_else(|| {
            vec![
                wiki::DEFAULT_SUBTOPIC_TAG.to_string(),
                content_type.tag().to_string(),
            ]
        });
        let description = format!(
            "{content_type} entry based on the ScienceDaily article \"{}\"",
            article.title
        );

        let response = self
            .store
            .create(NewPage {
                title: topic.to_string(),
                content,
                path: path.clone(),
                tags,
                description,
            })
            .await?;

        Ok(PageProcessingResult::created(
            topic,
            path,
            content_type,
            response.succeeded,
            response.message,
        ))
    }

    async fn update_page(
        &self,
        article: &ArticleRecord,
        page: &ExistingPage,
        content_type: ContentType,
        topic: &str,
    ) -> PageProcessingResult {
        match self.try_update(article, page, content_type, topic).await {
            Ok(result) => result,
            Err(e) => PageProcessingResult::failed(&page.title, content_type, e.to_string()),
        }
    }

    async fn try_update(
        &self,
        article: &ArticleRecord,
        page: &ExistingPage,
        content_type: ContentType,
        topic: &str,
    ) -> Result<PageProcessingResult> {
        let id: i64 = page
            .id
            .parse()
            .map_err(|_| SyncError::Store(format!("page id '{}' is not numeric", page.id)))?;

        let existing_content = self
            .store
            .read(id)
            .await?
            .map(|p| p.content)
            .unwrap_or_default();

        let content = self
            .generator
            .generate(article, content_type, topic, &existing_content)
            .await?;

        let response = self
            .store
            .update(PageUpdate {
                id,
                title: page.title.clone(),
                content,
                tags: Vec::new(),
            })
            .await?;

        Ok(PageProcessingResult::updated(
            &page.title,
            &page.path,
            content_type,
            response.succeeded,
            response.message,
        ))
    }
}

/// The analysis' main topic, falling back to the article title when the
/// oracle left it blank.
fn main_topic_of(analysis: &TopicAnalysis, article: &ArticleRecord) -> String {
    if analysis.main_topic.trim().is_empty() {
        article.title.clone()
    } else {
        analysis.main_topic.clone()
    }
}

fn bucket(pages: &[PageProcessingResult], action: PageAction) -> Vec<PageProcessingResult> {
    pages
        .iter()
        .filter(|p| p.action == action)
        .cloned()
        .collect()
}

/// Replace path-hostile characters in a topic with hyphens.
pub fn slugify_topic(topic: &str) -> String {
    topic.replace([' ', '/'], "-")
}

/// Type-scoped wiki path for a topic, e.g. `science/concept/Gene-Editing`.
pub fn page_path(content_type: ContentType, topic: &str) -> String {
    format!(
        "{}/{}/{}",
        wiki::PATH_ROOT,
        content_type.tag(),
        slugify_topic(topic)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::LlmProvider;
    use crate::types::PageContent;
    use crate::wiki::{PageStore, StoreResponse};
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};

    // -------------------------------------------------------------------------
    // Mock collaborators
    // -------------------------------------------------------------------------

    /// Oracle scripted by prompt kind: translation, analysis, similarity
    /// and generation are told apart by the system prompt's opening words.
    struct ScriptedOracle {
        analysis: String,
        similarity: String,
    }

    impl ScriptedOracle {
        fn new(analysis: &str) -> Self {
            Self {
                analysis: analysis.to_string(),
                similarity: "[]".to_string(),
            }
        }

        fn with_similarity(mut self, similarity: &str) -> Self {
            self.similarity = similarity.to_string();
            self
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedOracle {
        async fn complete(&self, system: &str, _user: &str) -> Result<String> {
            if system.starts_with("Translate") {
                return Ok("translated story".to_string());
            }
            if system.starts_with("Assess how related") {
                return Ok(self.similarity.clone());
            }
            if system.starts_with("Write a wiki entry") {
                return Ok("# Entry\n\nA cited sentence. [1]\n\n## References\n\n[1] X.".to_string());
            }
            if system.starts_with("Update an existing") {
                return Ok("# Revised entry\n\nMerged. [1] [2]".to_string());
            }
            Ok(self.analysis.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }
    }

    #[derive(Default)]
    struct MockStore {
        search_results: HashMap<String, Vec<ExistingPage>>,
        read_results: HashMap<i64, PageContent>,
        fail_create_for: HashSet<String>,
        search_calls: Mutex<Vec<String>>,
        created: Mutex<Vec<NewPage>>,
        updated: Mutex<Vec<PageUpdate>>,
    }

    impl MockStore {
        fn with_search(mut self, term: &str, pages: Vec<ExistingPage>) -> Self {
            self.search_results.insert(term.to_string(), pages);
            self
        }

        fn with_read(mut self, id: i64, content: &str) -> Self {
            self.read_results.insert(
                id,
                PageContent {
                    title: String::new(),
                    content: content.to_string(),
                },
            );
            self
        }

        fn failing_create_for(mut self, title: &str) -> Self {
            self.fail_create_for.insert(title.to_string());
            self
        }
    }

    #[async_trait]
    impl PageStore for MockStore {
        async fn search(&self, term: &str) -> Result<Vec<ExistingPage>> {
            self.search_calls.lock().unwrap().push(term.to_string());
            Ok(self.search_results.get(term).cloned().unwrap_or_default())
        }

        async fn read(&self, id: i64) -> Result<Option<PageContent>> {
            Ok(self.read_results.get(&id).cloned())
        }

        async fn create(&self, page: NewPage) -> Result<StoreResponse> {
            if self.fail_create_for.contains(&page.title) {
                return Err(SyncError::Store("connection reset".to_string()));
            }
            self.created.lock().unwrap().push(page);
            Ok(StoreResponse {
                succeeded: true,
                error_code: None,
                slug: None,
                message: Some("ok".to_string()),
            })
        }

        async fn update(&self, update: PageUpdate) -> Result<StoreResponse> {
            self.updated.lock().unwrap().push(update);
            Ok(StoreResponse {
                succeeded: true,
                error_code: None,
                slug: None,
                message: Some("ok".to_string()),
            })
        }
    }

    fn page(id: &str, title: &str) -> ExistingPage {
        ExistingPage {
            id: id.to_string(),
            title: title.to_string(),
            path: format!("science/main/{}", slugify_topic(title)),
        }
    }

    fn article() -> ArticleRecord {
        ArticleRecord {
            title: "X".to_string(),
            date: "March 24, 2025".to_string(),
            source: "University of Example".to_string(),
            summary: "Summary.".to_string(),
            full_story: "Full story.".to_string(),
            url: "https://www.sciencedaily.com/releases/x.htm".to_string(),
        }
    }

    fn analysis_json(main: &str, concepts: &[&str], methods: &[&str], applications: &[&str]) -> String {
        serde_json::json!({
            "main_topic": main,
            "concepts": concepts,
            "methods": methods,
            "applications": applications,
            "problems": ["ignored"],
            "suggested_tags": ["physics"],
        })
        .to_string()
    }

    fn service(store: Arc<MockStore>, oracle: ScriptedOracle) -> SyncService {
        SyncService::new(store, Arc::new(oracle), &Config::default()).unwrap()
    }

    // -------------------------------------------------------------------------
    // Main-topic merge gating
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_main_merges_on_high_score_with_matching_result() {
        let store = Arc::new(
            MockStore::default()
                .with_search("A", vec![page("7", "A")])
                .with_read(7, "# Old A"),
        );
        let oracle = ScriptedOracle::new(&analysis_json("A", &[], &[], &[]))
            .with_similarity(r#"[{"page_title": "A", "similarity_score": 0.9}]"#);

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.updated.len(), 1);
        assert!(report.created.is_empty());
        assert_eq!(store.updated.lock().unwrap().len(), 1);
        assert_eq!(store.updated.lock().unwrap()[0].id, 7);
    }

    #[tokio::test]
    async fn test_main_creates_below_merge_gate() {
        let store = Arc::new(MockStore::default().with_search("A", vec![page("7", "A")]));
        let oracle = ScriptedOracle::new(&analysis_json("A", &[], &[], &[]))
            .with_similarity(r#"[{"page_title": "A", "similarity_score": 0.79}]"#);

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);
        assert!(report.updated.is_empty());
        assert!(store.updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_main_creates_when_suggestion_has_no_matching_result() {
        // High score, but no search result is actually titled "A"
        let store = Arc::new(MockStore::default().with_search("A", vec![page("7", "Unrelated")]));
        let oracle = ScriptedOracle::new(&analysis_json("A", &[], &[], &[]))
            .with_similarity(r#"[{"page_title": "A", "similarity_score": 0.9}]"#);

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);
        assert!(report.updated.is_empty());
    }

    #[tokio::test]
    async fn test_tie_broken_by_first_maximal_suggestion() {
        let store = Arc::new(
            MockStore::default()
                .with_search("T", vec![page("1", "First"), page("2", "Second")])
                .with_read(1, "# First"),
        );
        let oracle = ScriptedOracle::new(&analysis_json("T", &[], &[], &[])).with_similarity(
            r#"[{"page_title": "First", "similarity_score": 0.9},
                {"page_title": "Second", "similarity_score": 0.9}]"#,
        );

        service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        let updated = store.updated.lock().unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].title, "First");
    }

    // -------------------------------------------------------------------------
    // Sub-topic resolution
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_blank_subtopic_skipped_without_store_call() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new(&analysis_json("T", &["", "   ", "B"], &[], &[]));

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        let skipped: Vec<_> = report
            .pages
            .iter()
            .filter(|p| p.action == PageAction::Skipped)
            .collect();
        assert_eq!(skipped.len(), 2);

        let searches = store.search_calls.lock().unwrap();
        assert!(searches.iter().all(|term| !term.trim().is_empty()));
        assert!(searches.contains(&"B".to_string()));
    }

    #[tokio::test]
    async fn test_subtopic_updates_on_case_insensitive_title_match() {
        let store = Arc::new(
            MockStore::default()
                .with_search("Protein Folding", vec![page("3", "protein folding")])
                .with_read(3, "# protein folding"),
        );
        let oracle = ScriptedOracle::new(&analysis_json("T", &["Protein Folding"], &[], &[]));

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        let concept: Vec<_> = report
            .pages
            .iter()
            .filter(|p| p.content_type == ContentType::Concept)
            .collect();
        assert_eq!(concept.len(), 1);
        assert_eq!(concept[0].action, PageAction::Updated);
        assert_eq!(store.updated.lock().unwrap()[0].id, 3);
    }

    #[tokio::test]
    async fn test_subtopic_creates_without_exact_match() {
        // A search hit that is not an exact title match must not be updated
        let store = Arc::new(
            MockStore::default().with_search("CRISPR", vec![page("3", "CRISPR screening assay")]),
        );
        let oracle = ScriptedOracle::new(&analysis_json("T", &["CRISPR"], &[], &[]));

        service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert!(store.updated.lock().unwrap().is_empty());
        let created = store.created.lock().unwrap();
        assert!(created.iter().any(|p| p.title == "CRISPR"));
    }

    #[tokio::test]
    async fn test_store_failure_does_not_abort_remaining_topics() {
        let store = Arc::new(MockStore::default().failing_create_for("B"));
        let oracle = ScriptedOracle::new(&analysis_json("T", &["A", "B", "C"], &[], &[]));

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        let by_title = |title: &str| {
            report
                .pages
                .iter()
                .find(|p| p.title == title)
                .unwrap_or_else(|| panic!("no result for {title}"))
                .clone()
        };

        let failed = by_title("B");
        assert_eq!(failed.action, PageAction::Failed);
        assert!(!failed.success);
        assert!(failed.error.as_deref().unwrap().contains("connection reset"));

        // C was still attempted and created after B failed
        assert_eq!(by_title("C").action, PageAction::Created);
        assert!(store.created.lock().unwrap().iter().any(|p| p.title == "C"));
    }

    // -------------------------------------------------------------------------
    // End-to-end scenario
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_end_to_end_creates_main_and_concepts_only() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new(&analysis_json("X", &["A", "B"], &[], &[]));

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.created.len(), 3); // main + 2 concepts
        assert!(report.updated.is_empty());

        let created = store.created.lock().unwrap();
        let paths: Vec<&str> = created.iter().map(|p| p.path.as_str()).collect();
        assert!(paths.contains(&"science/main/X"));
        assert!(paths.contains(&"science/concept/A"));
        assert!(paths.contains(&"science/concept/B"));

        // problems are extracted but never materialized or searched
        let searches = store.search_calls.lock().unwrap();
        assert!(!searches.contains(&"ignored".to_string()));
    }

    #[tokio::test]
    async fn test_main_only_skips_subtopics() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new(&analysis_json("X", &["A", "B"], &["M"], &[]));

        let report = service(store.clone(), oracle)
            .with_options(SyncOptions {
                main_only: true,
                ..SyncOptions::default()
            })
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.pages.len(), 1);
        assert_eq!(report.created.len(), 1);
        assert_eq!(store.created.lock().unwrap()[0].path, "science/main/X");
    }

    #[tokio::test]
    async fn test_tags_for_main_and_subtopics() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new(&analysis_json("X", &["A"], &[], &[]));

        service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        let created = store.created.lock().unwrap();
        let main = created.iter().find(|p| p.title == "X").unwrap();
        assert_eq!(main.tags, vec!["physics"]);

        let concept = created.iter().find(|p| p.title == "A").unwrap();
        assert_eq!(concept.tags, vec!["science research", "concept"]);
    }

    // -------------------------------------------------------------------------
    // Analysis fallback policy
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_lenient_mode_degrades_to_minimal_analysis() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new("not json at all");

        let report = service(store.clone(), oracle)
            .process_article(article())
            .await
            .unwrap();

        assert_eq!(report.analysis, TopicAnalysis::minimal("X"));
        // Minimal analysis still resolves the main entry from the title
        assert_eq!(store.created.lock().unwrap()[0].title, "X");
    }

    #[tokio::test]
    async fn test_strict_mode_fails_on_undecodable_analysis() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new("not json at all");

        let err = service(store, oracle)
            .with_options(SyncOptions {
                strict_analysis: true,
                ..SyncOptions::default()
            })
            .process_article(article())
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::AnalysisDecode(_)));
    }

    #[tokio::test]
    async fn test_missing_title_is_fatal() {
        let store = Arc::new(MockStore::default());
        let oracle = ScriptedOracle::new(&analysis_json("X", &[], &[], &[]));

        let err = service(store, oracle)
            .process_article(ArticleRecord::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::ArticleStructure { .. }));
    }

    // -------------------------------------------------------------------------
    // Paths
    // -------------------------------------------------------------------------

    #[test]
    fn test_page_path_shapes() {
        assert_eq!(
            page_path(ContentType::Concept, "Protein Folding/Dynamics"),
            "science/concept/Protein-Folding-Dynamics"
        );
        assert_eq!(page_path(ContentType::Main, "X"), "science/main/X");
    }

    proptest! {
        #[test]
        fn prop_slugified_topics_are_path_safe(topic in ".{0,64}") {
            let slug = slugify_topic(&topic);
            prop_assert!(!slug.contains(' '));
            prop_assert!(!slug.contains('/'));
        }
    }
}
