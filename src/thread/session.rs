//! Thread state for one widget instance
//!
//! [`ChatSession`] is the Rust counterpart of the widget's component state: it
//! owns the config that produced the thread, the thread itself and the
//! metadata visibility switch. Network I/O stays with the host; the session
//! only hands out request messages and accepts decoded responses.

use tracing::debug;

use crate::models::{
    ChatConfig, MessageDirection, MessageRecord, PromptResponse, RequestMessage, SenderRole,
};
use crate::options::ChatOptions;
use crate::thread::factory::text_message;
use crate::thread::init::{ThreadState, chat_init_from_config};
use crate::thread::metadata::{toggle_metadata, visible_messages};
use crate::thread::request::chat_messages_to_request_messages;
use crate::thread::response::messages_from_response;
use crate::thread::sanitize::sanitize_prompt;

#[derive(Debug)]
pub struct ChatSession {
    config: ChatConfig,
    options: ChatOptions,
    state: ThreadState,
    messages: Vec<MessageRecord>,
    show_metadata: bool,
}

impl ChatSession {
    /// Build the session and its thread from a freshly fetched config
    pub fn from_config(config: ChatConfig, options: ChatOptions, show_metadata: bool) -> Self {
        let init = chat_init_from_config(&config, &options);
        let messages = toggle_metadata(&init.messages, show_metadata);
        Self { config, options, state: init.state, messages, show_metadata }
    }

    /// Replace the config and rebuild the thread from it
    ///
    /// History is server state, so the previous thread is discarded entirely.
    pub fn reset(&mut self, config: ChatConfig) {
        let init = chat_init_from_config(&config, &self.options);
        self.messages = toggle_metadata(&init.messages, self.show_metadata);
        self.state = init.state;
        self.config = config;
        if self.options.debug_mode {
            debug!("ChatSession::reset() thread is {}", self.state.label());
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    pub fn state(&self) -> &ThreadState {
        &self.state
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn visible_messages(&self) -> Vec<&MessageRecord> {
        visible_messages(&self.messages)
    }

    pub fn show_metadata(&self) -> bool {
        self.show_metadata
    }

    /// Flip metadata visibility and return the new setting
    pub fn toggle_metadata(&mut self) -> bool {
        self.show_metadata = !self.show_metadata;
        self.messages = toggle_metadata(&self.messages, self.show_metadata);
        if self.options.debug_mode {
            debug!("show_metadata: {}", self.show_metadata);
        }
        self.show_metadata
    }

    /// Append the user's prompt and return the request messages to send
    ///
    /// Returns `None` without touching the thread when the sanitized prompt is empty.
    pub fn submit_prompt(&mut self, input: &str) -> Option<Vec<RequestMessage>> {
        let prompt = sanitize_prompt(input)?;
        self.messages.push(text_message(&prompt, MessageDirection::Outgoing, SenderRole::User));

        let requests = chat_messages_to_request_messages(&self.messages);
        if self.options.debug_mode {
            debug!("submit_prompt() sending {} request messages", requests.len());
        }
        Some(requests)
    }

    /// Append the records carried by a prompt response; returns how many were added
    pub fn apply_response(&mut self, response: &PromptResponse) -> usize {
        let records = messages_from_response(response, &self.options);
        let added = records.len();
        self.messages.extend(toggle_metadata(&records, self.show_metadata));
        added
    }

    pub fn title(&self) -> String {
        self.config.title()
    }

    pub fn info(&self) -> String {
        self.config.info()
    }
}
