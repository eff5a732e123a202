//! ScienceDaily Article Extraction
//!
//! Fetches an article page and pulls out the structured fields downstream
//! components need: title, date, source, summary and the full story text.
//!
//! ScienceDaily pages label their metadata as semi-structured
//! `**Date:**`-style bullets and mark the body with a `FULL STORY` heading,
//! so extraction is regex-over-text first, with a DOM sibling walk as the
//! fallback when the text scan finds nothing. Every field except the title
//! degrades to an empty string when missing.

use std::time::Duration;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::constants::source;
use crate::types::{ArticleRecord, Result, SyncError};

/// Extracts article records from ScienceDaily URLs.
pub struct ScienceDailyExtractor {
    client: reqwest::Client,
}

impl ScienceDailyExtractor {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(source::FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| SyncError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch the article page and extract its structured fields.
    pub async fn extract(&self, url: &str) -> Result<ArticleRecord> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SyncError::retrieval(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::retrieval(url, format!("HTTP status {status}")));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SyncError::retrieval(url, e.to_string()))?;

        parse_article(&html, url)
    }
}

/// Parse an already-fetched article page.
///
/// Pure function of the HTML so it can be exercised without network access.
pub fn parse_article(html: &str, url: &str) -> Result<ArticleRecord> {
    let document = Html::parse_document(html);

    let h1 = Selector::parse("h1").expect("valid selector");
    let title: String = document
        .select(&h1)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SyncError::structure(url, "no article heading found"))?;

    let text_content: String = document.root_element().text().collect();

    let date = extract_labeled_field(&text_content, "Date");
    let source = extract_labeled_field(&text_content, "Source");
    let summary = extract_labeled_field(&text_content, "Summary");

    let mut full_story = extract_full_story(&text_content);
    if full_story.is_empty() {
        debug!("text scan found no FULL STORY section, trying DOM fallback");
        full_story = full_story_from_dom(&document);
    }

    Ok(ArticleRecord {
        title,
        date,
        source,
        summary,
        full_story,
        url: url.to_string(),
    })
}

/// Extract a `**Name:**`-labeled bullet value, falling back to the plain
/// `Name:` form. Missing label yields an empty string.
fn extract_labeled_field(text: &str, name: &str) -> String {
    let bold = Regex::new(&format!(r"-\s*\*\*{name}:\*\*\s*([^\n\r-]+)")).expect("valid regex");
    if let Some(caps) = bold.captures(text) {
        return caps[1].trim().to_string();
    }

    let plain = Regex::new(&format!(r"{name}:\s*([^\n\r,]+)")).expect("valid regex");
    if let Some(caps) = plain.captures(text) {
        return caps[1].trim().to_string();
    }

    String::new()
}

/// Take the text between the `FULL STORY` marker and the first trailing
/// section (`RELATED` links or `Story Source:`), collapsing whitespace and
/// dropping known boilerplate sentences.
fn extract_full_story(text: &str) -> String {
    let Some(marker) = text.find("FULL STORY") else {
        return String::new();
    };

    let rest = &text[marker + "FULL STORY".len()..];
    let mut end = rest.len();
    for terminator in ["RELATED", "Story Source:"] {
        if let Some(pos) = rest.find(terminator) {
            end = end.min(pos);
        }
    }

    let collapse = Regex::new(r"\s+").expect("valid regex");
    let mut story = collapse.replace_all(rest[..end].trim(), " ").into_owned();

    for boilerplate in [r"Co-authors[^.\n]*", r"Additional research[^.\n]*"] {
        let re = Regex::new(boilerplate).expect("valid regex");
        story = re.replace_all(&story, "").into_owned();
    }

    story.trim().to_string()
}

/// DOM fallback: locate the text node holding `FULL STORY`, then collect
/// the following sibling paragraphs until a trailing section begins.
fn full_story_from_dom(document: &Html) -> String {
    let marker_node = document
        .tree
        .nodes()
        .find(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| text.contains("FULL STORY"))
        })
        .and_then(|node| node.parent());

    let Some(parent) = marker_node else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();
    let mut next = parent.next_sibling();
    while let Some(node) = next {
        let Some(element) = ElementRef::wrap(node) else {
            // Whitespace and comment nodes between paragraphs
            next = node.next_sibling();
            continue;
        };

        if !matches!(element.value().name(), "p" | "div") {
            break;
        }

        let text = element.text().collect::<String>().trim().to_string();
        if text.is_empty() || text.starts_with("RELATED") || text.starts_with("Story Source") {
            break;
        }

        parts.push(text);
        next = node.next_sibling();
    }

    parts.join(" ")
}
