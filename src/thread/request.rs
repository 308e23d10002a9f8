use serde_json::Value;

use crate::models::api::is_present;
use crate::models::{MessageRecord, RequestMessage};

/// Convert the thread into the `{role, content}` list the prompt endpoint expects
///
/// Diagnostic (`smarter`) records are dropped. Role and content come from the
/// record's original backend message when it carries them (`role` / `message`),
/// otherwise from the record itself. Order is preserved.
pub fn chat_messages_to_request_messages(messages: &[MessageRecord]) -> Vec<RequestMessage> {
    messages
        .iter()
        .filter(|message| message.sender.is_request_role())
        .map(request_message_factory)
        .collect()
}

fn request_message_factory(message: &MessageRecord) -> RequestMessage {
    let original = message.original_message.as_ref();

    let role = original
        .and_then(|o| o.get("role"))
        .and_then(Value::as_str)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| message.sender.as_str().to_string());

    let content = original
        .and_then(|o| o.get("message"))
        .filter(|m| is_present(m))
        .cloned()
        .or_else(|| message.content.clone())
        .unwrap_or(Value::Null);

    RequestMessage { role, content }
}
