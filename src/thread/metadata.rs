use crate::models::MessageRecord;

/// Show or hide backend metadata records (`smarter`, `system`, `tool`)
///
/// User and assistant records stay visible; records without displayable
/// content stay hidden regardless of `show`.
pub fn toggle_metadata(messages: &[MessageRecord], show: bool) -> Vec<MessageRecord> {
    messages
        .iter()
        .map(|message| {
            let display = if !message.has_displayable_content() {
                false
            } else if message.sender.is_metadata() {
                show
            } else {
                true
            };
            MessageRecord { display, ..message.clone() }
        })
        .collect()
}

/// Records the UI should render, in thread order
pub fn visible_messages(messages: &[MessageRecord]) -> Vec<&MessageRecord> {
    messages.iter().filter(|message| message.display).collect()
}
