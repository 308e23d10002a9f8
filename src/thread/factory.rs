//! Message record construction
//!
//! Every record in a thread is built by [`message_factory`], which decides
//! whether the record is displayable and rewrites markdown links in text
//! content to HTML anchors.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::models::{MessageDirection, MessageRecord, SenderRole};

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid markdown link regex"));

/// Rewrites every `[text](url)` in `text` to `<a href="url">text</a>`
///
/// # Examples
///
/// ```
/// use smarter_chat::thread::markdown_links_to_html;
///
/// let html = markdown_links_to_html("Read [the docs](https://smarter.sh/docs).");
/// assert_eq!(html, r#"Read <a href="https://smarter.sh/docs">the docs</a>."#);
/// ```
pub fn markdown_links_to_html(text: &str) -> String {
    MARKDOWN_LINK_RE.replace_all(text, r#"<a href="${2}">${1}</a>"#).into_owned()
}

/// Converts markdown links in string content; any other value is returned unchanged
pub fn convert_markdown_links_to_html(content: Value) -> Value {
    match content {
        Value::String(text) => Value::String(markdown_links_to_html(&text)),
        other => {
            warn!(
                "convert_markdown_links_to_html() expected a string but received {}",
                json_type_name(&other)
            );
            other
        }
    }
}

/// Build a display-ready message record
///
/// `display` is true only for string content. `original_message` is the raw
/// backend object the record came from; `None` makes the record its own source.
/// Never fails: unusable content simply produces a hidden record.
pub fn message_factory(
    original_message: Option<Value>,
    content: Option<Value>,
    direction: MessageDirection,
    sender: SenderRole,
) -> MessageRecord {
    let display = matches!(content, Some(Value::String(_)));
    let content = if display { content.map(convert_markdown_links_to_html) } else { content };

    MessageRecord { content, direction, sender, sent_time: Utc::now(), display, original_message }
}

/// Shorthand for a record built from plain text with no backend source
pub fn text_message(text: &str, direction: MessageDirection, sender: SenderRole) -> MessageRecord {
    message_factory(None, Some(Value::String(text.to_string())), direction, sender)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_markdown_link_becomes_anchor() {
        let record = text_message(
            "Visit [Smarter](https://smarter.sh) today",
            MessageDirection::Incoming,
            SenderRole::Assistant,
        );
        assert_eq!(record.text(), Some(r#"Visit <a href="https://smarter.sh">Smarter</a> today"#));
        assert!(record.display);
    }

    #[test]
    fn test_every_link_is_converted() {
        let html = markdown_links_to_html("[a](https://a.example) then [b](https://b.example)");
        assert_eq!(html, r#"<a href="https://a.example">a</a> then <a href="https://b.example">b</a>"#);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = "No links, just [brackets] and (parens).";
        assert_eq!(markdown_links_to_html(text), text);
    }

    #[test]
    fn test_empty_link_text_is_not_converted() {
        assert_eq!(markdown_links_to_html("[](https://x.example)"), "[](https://x.example)");
    }

    #[test]
    fn test_null_content_is_not_displayed() {
        let record =
            message_factory(None, None, MessageDirection::Incoming, SenderRole::Assistant);
        assert!(!record.display);
        assert!(record.content.is_none());
        assert!(record.original_message.is_none());
    }

    #[test]
    fn test_structured_content_is_hidden_and_unchanged() {
        let payload = json!({"tool_calls": [{"id": "call_1"}], "text": "[x](y)"});
        let record = message_factory(
            None,
            Some(payload.clone()),
            MessageDirection::Incoming,
            SenderRole::Tool,
        );
        assert!(!record.display);
        assert_eq!(record.content, Some(payload));
    }

    #[test]
    fn test_non_string_conversion_returns_value() {
        assert_eq!(convert_markdown_links_to_html(json!(42)), json!(42));
        assert_eq!(convert_markdown_links_to_html(Value::Null), Value::Null);
    }

    #[test]
    fn test_original_message_is_kept() {
        let original = json!({"role": "user", "content": "hi", "smarter_is_new": false});
        let record = message_factory(
            Some(original.clone()),
            Some(json!("hi")),
            MessageDirection::Outgoing,
            SenderRole::User,
        );
        assert_eq!(record.original_message, Some(original));
        assert_eq!(record.direction, MessageDirection::Outgoing);
    }
}
