//! Rebuilding a thread from persisted backend history
//!
//! Restore is best effort. Entries with an unknown role are logged and skipped;
//! the infallible [`chat_restore_from_backend`] absorbs every failure into an
//! empty thread so the caller falls back to the intro sequence.
//! [`try_restore_from_backend`] runs the same pipeline but tells the caller
//! why nothing was restored.

use tracing::{debug, error, warn};

use crate::models::{ChatHistoryEntry, LastResponse, MessageDirection, MessageRecord, SenderRole};
use crate::options::ChatOptions;
use crate::thread::factory::message_factory;

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("no chat history to restore")]
    NoHistory,

    #[error("chat history present but no entry could be restored ({skipped} skipped)")]
    Unparseable { skipped: usize },
}

/// Rebuild the thread from persisted history, reporting why nothing was restored
///
/// Output order matches `chat_history`; the record for `last_response`, if any,
/// is always last.
pub fn try_restore_from_backend(
    chat_history: &[ChatHistoryEntry],
    last_response: Option<&LastResponse>,
    options: &ChatOptions,
) -> Result<Vec<MessageRecord>, RestoreError> {
    let last_message = last_response.and_then(LastResponse::first_message);
    if chat_history.is_empty() && last_message.is_none() {
        return Err(RestoreError::NoHistory);
    }

    let mut messages = Vec::with_capacity(chat_history.len() + 1);
    let mut skipped = 0;

    for entry in chat_history {
        let sender = match entry.role.parse::<SenderRole>() {
            Ok(sender) => sender,
            Err(e) => {
                error!("chat_restore_from_backend() invalid role received: {:?}", e.0);
                skipped += 1;
                continue;
            }
        };

        messages.push(message_factory(
            Some(entry.to_value()),
            entry.content.clone(),
            sender.direction(),
            sender,
        ));
    }

    if let Some(last_message) = last_message {
        messages.push(message_factory(
            Some(last_message.to_value()),
            last_message.content.clone(),
            MessageDirection::Incoming,
            SenderRole::Assistant,
        ));
    }

    if messages.is_empty() {
        return Err(RestoreError::Unparseable { skipped });
    }

    if skipped > 0 {
        warn!("Restored chat history: {} messages ({} skipped)", messages.len(), skipped);
    } else if options.debug_mode {
        debug!("Restored chat history: {} messages", messages.len());
    }

    Ok(messages)
}

/// Rebuild the thread from persisted history
///
/// Never fails: any problem is logged and produces an empty thread.
pub fn chat_restore_from_backend(
    chat_history: &[ChatHistoryEntry],
    last_response: Option<&LastResponse>,
    options: &ChatOptions,
) -> Vec<MessageRecord> {
    match try_restore_from_backend(chat_history, last_response, options) {
        Ok(messages) => messages,
        Err(RestoreError::NoHistory) => {
            if options.debug_mode {
                debug!("chat_restore_from_backend() no history to restore");
            }
            Vec::new()
        }
        Err(e) => {
            error!("chat_restore_from_backend() error occurred while restoring chat: {}", e);
            Vec::new()
        }
    }
}
