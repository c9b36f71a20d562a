//! Extraction of a JSON object from noisy model text.
//!
//! Multimodal models frequently wrap their JSON verdict in markdown fences
//! or surround it with prose. This module isolates the one fragile piece of
//! that cleanup: strip fence markers and newlines, then take the greedy span
//! from the first `{` to the last `}`.
//!
//! Known correctness risk, kept deliberately: unrelated braces before or
//! after the real object widen the span and can corrupt the extraction.
//! Callers treat a subsequent parse failure as terminal.

/// Extract the first JSON object span from free-form model text.
///
/// Returns `None` when the cleaned text contains no `{...}` span.
pub fn extract_json_object(raw: &str) -> Option<String> {
    let cleaned = raw
        .replace("```json", "")
        .replace("```", "")
        .replace(['\n', '\r'], " ");

    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    Some(cleaned[start..=end].to_string())
}
