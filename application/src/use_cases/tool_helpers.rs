//! Shared helpers for the tool loop.

use wikibot_domain::tool::entities::ToolCall;
use wikibot_domain::util::truncate_str;

/// Extract a short preview string from tool call arguments.
///
/// Looks for well-known keys (`search_term`, `title`, `query`) first, then
/// falls back to the first string value found.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["search_term", "title", "query"];
    for key in &keys {
        if let Some(serde_json::Value::String(s)) = call.arguments.get(*key) {
            return truncate_preview(s, 50);
        }
    }
    // Fallback: first string value
    for value in call.arguments.values() {
        if let Some(s) = value.as_str() {
            return truncate_preview(s, 50);
        }
    }
    String::new()
}

fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Cap tool output at `max_bytes`, on a char boundary, with a marker.
pub(crate) fn cap_tool_output(text: String, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text;
    }
    let kept = truncate_str(&text, max_bytes);
    format!(
        "{}\n\n[truncated: {} of {} bytes shown]",
        kept,
        kept.len(),
        text.len()
    )
}
