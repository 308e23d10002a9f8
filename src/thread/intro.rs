use serde_json::Value;

use crate::models::{MessageDirection, MessageRecord, SenderRole};
use crate::thread::factory::message_factory;

const EXAMPLE_PROMPTS_HEADER: &str = "Some example prompts to get you started:";

/// Format the example prompt block, one prompt per line
///
/// Returns `None` when there are no prompts to show.
pub fn example_prompts_block<S: AsRef<str>>(prompts: &[S]) -> Option<String> {
    if prompts.is_empty() {
        return None;
    }

    let mut block = format!("{}\r\n\r\n", EXAMPLE_PROMPTS_HEADER);
    for prompt in prompts {
        block.push_str(prompt.as_ref());
        block.push_str("\r\n");
    }
    Some(block)
}

/// Synthesize the greeting thread shown when there is no history
///
/// Always yields the system role followed by the welcome message, plus an
/// example prompt block when prompts are configured.
pub fn chat_intro<S: AsRef<str>>(
    welcome_message: Option<&str>,
    system_role: Option<&str>,
    example_prompts: &[S],
) -> Vec<MessageRecord> {
    let as_content = |text: Option<&str>| text.map(|t| Value::String(t.to_string()));

    let mut messages = vec![
        message_factory(
            None,
            as_content(system_role),
            MessageDirection::Incoming,
            SenderRole::System,
        ),
        message_factory(
            None,
            as_content(welcome_message),
            MessageDirection::Incoming,
            SenderRole::Assistant,
        ),
    ];

    if let Some(examples) = example_prompts_block(example_prompts) {
        messages.push(message_factory(
            None,
            Some(Value::String(examples)),
            MessageDirection::Incoming,
            SenderRole::Assistant,
        ));
    }

    messages
}
