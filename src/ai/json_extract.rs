//! JSON Extraction from LLM Responses
//!
//! Oracles are prompted to answer with bare JSON but routinely wrap it in
//! markdown code fences or surrounding prose. This module is the single
//! place that tolerant extraction lives, decoupled from the callers that
//! interpret the result.
//!
//! Policy: strip a code-fence wrapper if present, then take the substring
//! between the first `{` and the last `}` and parse it. If no object
//! boundary exists or the enclosed text is not valid JSON, extraction fails
//! and the caller decides what to do about it.

use serde_json::Value;

use crate::types::{Result, SyncError};

/// Extract and parse the JSON object embedded in an LLM response.
pub fn extract_json_object(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw.trim());

    let start = cleaned
        .find('{')
        .ok_or_else(|| SyncError::AnalysisDecode(preview("no JSON object found", raw)))?;
    let end = cleaned
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| SyncError::AnalysisDecode(preview("no JSON object found", raw)))?;

    serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| SyncError::AnalysisDecode(preview(&format!("invalid JSON: {e}"), raw)))
}

/// Extract and parse the JSON array embedded in an LLM response.
///
/// Used by the similarity advisor, whose oracle contract is a top-level
/// array rather than an object.
pub fn extract_json_array(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fences(raw.trim());

    if let Ok(value) = serde_json::from_str::<Value>(cleaned)
        && value.is_array()
    {
        return Ok(value);
    }

    let start = cleaned
        .find('[')
        .ok_or_else(|| SyncError::AnalysisDecode(preview("no JSON array found", raw)))?;
    let end = cleaned
        .rfind(']')
        .filter(|&end| end > start)
        .ok_or_else(|| SyncError::AnalysisDecode(preview("no JSON array found", raw)))?;

    serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| SyncError::AnalysisDecode(preview(&format!("invalid JSON: {e}"), raw)))
}

/// Strip a single markdown code-fence wrapper (``` or ```json) if present.
pub fn strip_code_fences(s: &str) -> &str {
    let mut result = s.trim();

    if result.starts_with("```") {
        result = match result.find('\n') {
            Some(first_newline) => &result[first_newline + 1..],
            // Opening fence with no body
            None => "",
        };
    }

    if let Some(stripped) = result.trim_end().strip_suffix("```") {
        result = stripped;
    }

    result.trim()
}

fn preview(reason: &str, raw: &str) -> String {
    let head: String = raw.chars().take(120).collect();
    format!("{reason}; response starts: {head:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_object() {
        let value = extract_json_object(r#"{"main_topic": "CRISPR"}"#).unwrap();
        assert_eq!(value["main_topic"], "CRISPR");
    }

    #[test]
    fn test_fenced_object() {
        let raw = "```json\n{\"main_topic\": \"CRISPR\"}\n```";
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value["main_topic"], "CRISPR");
    }

    #[test]
    fn test_fence_without_language() {
        let raw = "```\n{\"k\": 1}\n```";
        assert_eq!(extract_json_object(raw).unwrap()["k"], 1);
    }

    #[test]
    fn test_object_wrapped_in_prose() {
        let raw = "Here is the analysis you asked for:\n{\"k\": [1, 2]}\nHope this helps!";
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value["k"][1], 2);
    }

    #[test]
    fn test_no_object_is_error() {
        assert!(extract_json_object("I could not analyze this article.").is_err());
    }

    #[test]
    fn test_unbalanced_braces_is_error() {
        assert!(extract_json_object(r#"{"k": "v""#).is_err());
    }

    #[test]
    fn test_array_bare_and_fenced() {
        let value = extract_json_array(r#"[{"page_title": "A", "similarity_score": 0.9}]"#).unwrap();
        assert_eq!(value[0]["page_title"], "A");

        let fenced = "```json\n[1, 2, 3]\n```";
        assert_eq!(extract_json_array(fenced).unwrap()[2], 3);
    }

    #[test]
    fn test_array_in_prose() {
        let raw = "Scores below.\n[{\"page_title\": \"A\", \"similarity_score\": 0.6}] Done.";
        let value = extract_json_array(raw).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_strip_fences_degenerate() {
        assert_eq!(strip_code_fences("```"), "");
        assert_eq!(strip_code_fences("```json\n```"), "");
        assert_eq!(strip_code_fences("plain"), "plain");
    }
}
