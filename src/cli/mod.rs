//! CLI Presentation Layer
//!
//! Terminal rendering for preview and synchronization reports, plus the
//! interactive confirmation used for off-domain URLs. Kept apart from
//! `main.rs` so the binary stays a thin argument-to-service adapter.

pub mod output;

pub use output::Output;

use console::Term;

use crate::constants::source;
use crate::types::{PageAction, PageProcessingResult, PreviewReport, SyncReport};

/// How many concepts the preview lists before eliding
const PREVIEW_CONCEPTS: usize = 5;

/// How many methods the preview lists before eliding
const PREVIEW_METHODS: usize = 3;

/// Whether a URL points at the expected article source. Anything else
/// needs interactive confirmation before processing.
pub fn is_expected_source(url: &str) -> bool {
    url.starts_with(source::SCIENCEDAILY_PREFIX)
}

/// Ask a y/n question on the terminal; anything but y/yes declines.
pub fn confirm(question: &str) -> std::io::Result<bool> {
    let term = Term::stdout();
    term.write_str(&format!("{question} (y/n): "))?;
    let answer = term.read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Render a preview report: the analysis and merge candidates, with
/// nothing written to the wiki.
pub fn print_preview(out: &Output, report: &PreviewReport) {
    out.header("Preview");

    out.item(&format!("Title:   {}", report.article.title));
    out.item(&format!("Source:  {}", report.article.source));
    out.item(&format!("Date:    {}", report.article.date));
    out.item(&format!("Summary: {}", elide(&report.article.summary, 100)));

    out.section("Analysis");
    out.item(&format!("Main topic: {}", report.analysis.main_topic));

    print_topic_list(out, "concepts", &report.analysis.concepts, PREVIEW_CONCEPTS);
    print_topic_list(out, "methods", &report.analysis.methods, PREVIEW_METHODS);
    out.item(&format!(
        "Suggested tags: {}",
        report.analysis.suggested_tags.join(", ")
    ));

    if !report.merge_suggestions.is_empty() {
        out.section("Merge suggestions");
        for suggestion in &report.merge_suggestions {
            out.item(&format!(
                "- {} (similarity: {:.2})",
                suggestion.page_title, suggestion.similarity_score
            ));
        }
    }

    if !report.existing_pages.is_empty() {
        out.info(&format!(
            "{} related existing page(s) found",
            report.existing_pages.len()
        ));
    }
}

/// Render a synchronization report: what was created, updated, skipped and
/// failed.
pub fn print_sync(out: &Output, report: &SyncReport) {
    out.success("Processing complete");
    out.item(&format!("Title: {}", report.article.title));

    if !report.created.is_empty() {
        out.section(&format!("Created {} page(s)", report.created.len()));
        for page in &report.created {
            print_page_line(out, page);
        }
    }

    if !report.updated.is_empty() {
        out.section(&format!("Updated {} page(s)", report.updated.len()));
        for page in &report.updated {
            print_page_line(out, page);
        }
    }

    let problems: Vec<&PageProcessingResult> = report
        .pages
        .iter()
        .filter(|p| matches!(p.action, PageAction::Failed | PageAction::Skipped))
        .collect();
    if !problems.is_empty() {
        out.section(&format!("Not written ({})", problems.len()));
        for page in problems {
            print_page_line(out, page);
        }
    }

    if !report.merge_suggestions.is_empty() {
        out.section("Merge suggestions considered");
        for suggestion in &report.merge_suggestions {
            out.item(&format!(
                "- {} (similarity: {:.2})",
                suggestion.page_title, suggestion.similarity_score
            ));
        }
    }
}

fn print_topic_list(out: &Output, label: &str, topics: &[String], limit: usize) {
    out.item(&format!("Identified {}: {}", label, topics.len()));
    for (i, topic) in topics.iter().take(limit).enumerate() {
        out.item(&format!("  {}. {}", i + 1, topic));
    }
    if topics.len() > limit {
        out.item(&format!("  ... {} more", topics.len() - limit));
    }
}

fn print_page_line(out: &Output, page: &PageProcessingResult) {
    let line = format!("{} ({})", page.title, page.content_type);
    match page.action {
        PageAction::Skipped => out.warning(&format!("{line} - skipped")),
        _ if page.success => out.success(&line),
        _ => {
            out.error(&line);
            if let Some(detail) = page.error.as_deref().or(page.message.as_deref()) {
                out.item(&format!("    {detail}"));
            }
        }
    }
}

fn elide(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}
