use tracing::{debug, error};

use crate::models::{MessageDirection, MessageRecord, PromptResponse, SenderRole};
use crate::options::ChatOptions;
use crate::thread::factory::message_factory;

/// Map the messages of a prompt response into incoming thread records
///
/// Messages without content are dropped, as are messages whose role is not a
/// known sender (logged). Each record keeps its response message as original.
pub fn messages_from_response(
    response: &PromptResponse,
    options: &ChatOptions,
) -> Vec<MessageRecord> {
    let records: Vec<MessageRecord> = response
        .smarter
        .messages
        .iter()
        .filter(|message| message.content.as_ref().is_some_and(|c| !c.is_null()))
        .filter_map(|message| {
            let sender = match message.role.parse::<SenderRole>() {
                Ok(sender) => sender,
                Err(e) => {
                    error!("messages_from_response() invalid role received: {}", e.0);
                    return None;
                }
            };
            Some(message_factory(
                Some(message.to_value()),
                message.content.clone(),
                MessageDirection::Incoming,
                sender,
            ))
        })
        .collect();

    if options.debug_mode {
        debug!(
            "messages_from_response() {} of {} messages added",
            records.len(),
            response.smarter.messages.len()
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn response(messages: Value) -> PromptResponse {
        serde_json::from_value(json!({"smarter": {"messages": messages}})).unwrap()
    }

    #[test]
    fn test_response_messages_are_incoming() {
        let response = response(json!([
            {"role": "smarter", "content": "prompt received"},
            {"role": "assistant", "content": "Hello!"}
        ]));

        let records = messages_from_response(&response, &ChatOptions::default());
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.direction == MessageDirection::Incoming));
        assert_eq!(records[0].sender, SenderRole::Smarter);
        assert_eq!(records[1].text(), Some("Hello!"));
    }

    #[test]
    fn test_null_content_is_dropped() {
        let response = response(json!([
            {"role": "assistant", "content": null, "tool_calls": [{"id": "call_1"}]},
            {"role": "tool", "content": "{\"temp\": 21}", "tool_call_id": "call_1"}
        ]));

        let records = messages_from_response(&response, &ChatOptions::debug());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, SenderRole::Tool);
        assert_eq!(records[0].original_message.as_ref().unwrap()["tool_call_id"], "call_1");
    }

    #[test]
    fn test_unknown_role_is_dropped() {
        let response = response(json!([{"role": "function", "content": "x"}]));
        assert!(messages_from_response(&response, &ChatOptions::default()).is_empty());
    }

    #[test]
    fn test_empty_response() {
        let records = messages_from_response(&PromptResponse::default(), &ChatOptions::default());
        assert!(records.is_empty());
    }
}
