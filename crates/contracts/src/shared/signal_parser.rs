//! Field extraction from incoming signal payloads.
//!
//! A payload is an arbitrary JSON object (typically a chat-bot webhook body).
//! Every scalar leaf becomes a field under its dotted path and, if not taken
//! yet, under its bare key. All non-blank strings are concatenated into the
//! synthetic `message_text` field, whose `name=value` lines are lifted into
//! fields as well.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Ordered map of extracted fields
pub type ParsedFields = Map<String, Value>;

/// Field holding the concatenated message text
pub const MESSAGE_TEXT_FIELD: &str = "message_text";

static KV_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*(.+?)\s*$").expect("valid key=value pattern")
});

/// Extract matchable fields from a signal payload
pub fn parse_signal_fields(payload: &Value) -> ParsedFields {
    let mut fields = ParsedFields::new();
    let mut text_chunks: Vec<String> = Vec::new();

    walk_payload(payload, "", &mut fields, &mut text_chunks);

    let content_text = content_of(payload, "text")
        .or_else(|| content_of(payload, "markdown"))
        .unwrap_or_default();
    if !content_text.is_empty() {
        text_chunks.insert(0, content_text);
    }

    let message_text = text_chunks
        .iter()
        .filter(|chunk| !chunk.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let message_text = message_text.trim();

    if !message_text.is_empty() {
        fields.insert(
            MESSAGE_TEXT_FIELD.to_string(),
            Value::String(message_text.to_string()),
        );
        for line in message_text.split(is_line_break) {
            if let Some(caps) = KV_LINE.captures(line) {
                fields.insert(caps[1].to_string(), Value::String(caps[2].to_string()));
            }
        }
    }

    fields
}

fn walk_payload(value: &Value, path: &str, fields: &mut ParsedFields, text_chunks: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk_payload(child, &child_path, fields, text_chunks);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                walk_payload(child, &format!("{path}[{idx}]"), fields, text_chunks);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            if !path.is_empty() {
                fields.insert(path.to_string(), value.clone());
                fields
                    .entry(leaf_key(path).to_string())
                    .or_insert_with(|| value.clone());
            }
            if let Value::String(s) = value {
                if !s.trim().is_empty() {
                    text_chunks.push(s.clone());
                }
            }
        }
        Value::Null => {}
    }
}

/// Line boundaries of Python's `str.splitlines`; `\r\n` yields an extra empty line
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// `a.b[2]` -> `b`
fn leaf_key(path: &str) -> &str {
    let last = path.rsplit('.').next().unwrap_or(path);
    last.split('[').next().unwrap_or(last)
}

/// `payload[key].content` when `payload[key]` is an object
fn content_of(payload: &Value, key: &str) -> Option<String> {
    let section = payload.get(key)?.as_object()?;
    Some(match section.get("content") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}
