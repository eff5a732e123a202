//! Oracle Prompt Construction
//!
//! Every prompt the pipeline sends lives here, so the wording that shapes
//! oracle behavior can be reviewed and changed in one place. The functions
//! return (system, user) halves for [`crate::ai::LlmProvider::complete`].

use crate::types::{ArticleRecord, ContentType};

// =============================================================================
// Topic Analysis
// =============================================================================

pub const ANALYSIS_SYSTEM: &str = "\
You are a professional knowledge-management expert. Analyze the given science \
article and extract the knowledge points suitable for wiki entries.

## Analysis rules:

1. **Concept decomposition**: identify key concepts, definitions, models and theories
2. **Technical methods**: extract experimental methods, technical tools and research approaches
3. **Application cases**: identify concrete application scenarios and empirical data
4. **Background problems**: analyze the problems and motivations the research addresses
5. **Citation relations**: identify connections to other research

Return the analysis as JSON with the following fields:
- concepts: list of key concepts
- methods: list of technical methods
- applications: list of application cases
- problems: list of background problems
- main_topic: the main topic (used for the primary entry)
- suggested_tags: list of suggested tags

Return only the JSON, no other text.";

pub fn analysis_user(article: &ArticleRecord, translated_story: &str) -> String {
    format!(
        "Analyze the following science article:\n\n\
         Title: {title}\n\
         Source: {source}\n\
         Date: {date}\n\
         Summary: {summary}\n\
         Full story: {story}\n\
         URL: {url}",
        title = article.title,
        source = article.source,
        date = article.date,
        summary = article.summary,
        story = translated_story,
        url = article.url,
    )
}

// =============================================================================
// Translation
// =============================================================================

pub fn translation_system(language: &str) -> String {
    format!(
        "Translate the provided text into {language}.\n\n\
         Requirements:\n\
         1. Preserve the meaning and structure of the original\n\
         2. Use correct characters and grammar for the target language\n\
         3. Keep technical terms accurate. When a proper noun or technical term \
         first appears, render it as \"translation (original)\", for example \
         \"共整合 (cointegration)\"; afterwards use the translation alone\n\
         4. Return only the translation, with no extra commentary"
    )
}

pub fn translation_user(text: &str) -> String {
    format!("Translate the following text:\n\n{text}")
}

// =============================================================================
// Merge Similarity Scoring
// =============================================================================

pub const SIMILARITY_SYSTEM: &str = "\
Assess how related a new topic is to each of the existing wiki pages, to decide \
whether new information should be merged into an existing page instead of \
creating a new one.

Score each existing page against the new topic on a 0-1 scale:
- 0.8-1.0: highly related, merging recommended
- 0.5-0.8: moderately related, merging worth considering
- 0-0.5: weakly related, an independent page is better

Return only a JSON array of objects with page_title and similarity_score fields.";

pub fn similarity_user(new_topic: &str, candidate_titles: &[&str]) -> String {
    format!(
        "New topic: {new_topic}\n\n\
         Existing page titles:\n{titles}\n\n\
         Assess the relevance and return the JSON result.",
        titles = candidate_titles.join("\n"),
    )
}

// =============================================================================
// Content Generation
// =============================================================================

pub fn generation_create_system(content_type: ContentType, topic: &str) -> String {
    format!(
        "Write a wiki entry from the given science article.\n\n\
         ## Requirements:\n\
         1. Use clean Markdown formatting\n\
         2. Keep the content accurate, concise and easy to understand\n\
         3. Every sentence must carry a precise citation marker (such as [1]), \
         and each source must be listed in a References section in APA 8 format\n\
         4. Add the References section at the bottom of the page and make sure \
         every marker resolves to the right source\n\
         5. Adapt the structure and emphasis to the content type\n\n\
         ## Content type: {content_type}\n\
         ## Entry topic: {topic}\n\n\
         Return the complete Markdown content, with a citation on every sentence."
    )
}

pub fn generation_create_user(article: &ArticleRecord, translated_story: &str) -> String {
    format!(
        "Create a wiki entry from the following science article:\n\n\
         Title: {title}\n\
         Source: {source}\n\
         Date: {date}\n\
         Summary: {summary}\n\
         Full story: {story}\n\
         URL: {url}",
        title = article.title,
        source = article.source,
        date = article.date,
        summary = article.summary,
        story = translated_story,
        url = article.url,
    )
}

pub fn generation_update_system(content_type: ContentType, topic: &str) -> String {
    format!(
        "Update an existing wiki entry with information from a newly published \
         science article.\n\n\
         ## Update requirements:\n\
         1. Preserve the valuable parts of the existing content\n\
         2. Integrate the new information without duplication\n\
         3. Keep the entry coherent and complete\n\
         4. Every sentence must carry a precise citation marker (such as [1]), \
         with each source listed in the References section in APA 8 format\n\
         5. Append the new citations to the References section at the bottom of \
         the page and make sure every marker resolves to the right source\n\n\
         ## Content type: {content_type}\n\
         ## Entry topic: {topic}\n\n\
         Return the complete updated Markdown content, with a citation on every \
         sentence."
    )
}

pub fn generation_update_user(
    existing_content: &str,
    article: &ArticleRecord,
    translated_story: &str,
) -> String {
    format!(
        "Existing entry content:\n{existing_content}\n\n\
         ---\n\n\
         New information source:\n\
         Title: {title}\n\
         Source: {source}\n\
         Date: {date}\n\
         Summary: {summary}\n\
         Full story: {story}\n\
         URL: {url}\n\n\
         Update the existing entry, integrating the new information.",
        title = article.title,
        source = article.source,
        date = article.date,
        summary = article.summary,
        story = translated_story,
        url = article.url,
    )
}
