use serde_json::Value;

use crate::models::{is_truthy, value_as_text};

/// Flattens a transcript into the single prompt sent upstream.
///
/// A usable context becomes a leading `Context: ...` paragraph. Each message
/// becomes one `User: ...` or `Assistant: ...` line; any role other than
/// `"user"` is labeled as the assistant. Content is not escaped or trimmed.
pub fn build_prompt(messages: &[Value], context: Option<&Value>) -> String {
    let transcript = messages
        .iter()
        .map(message_line)
        .collect::<Vec<_>>()
        .join("\n");

    match context.filter(|c| is_truthy(c)) {
        Some(context) => format!("Context: {}\n\n{}", value_as_text(context), transcript),
        None => transcript,
    }
}

fn message_line(message: &Value) -> String {
    let label = match message.get("role").and_then(Value::as_str) {
        Some("user") => "User",
        _ => "Assistant",
    };
    let content = message.get("content").map(value_as_text).unwrap_or_default();

    format!("{}: {}", label, content)
}
