use tracing::{debug, error};

use crate::models::{ChatConfig, ChatHistoryEntry, LastResponse, MessageRecord};
use crate::options::ChatOptions;
use crate::thread::intro::chat_intro;
use crate::thread::restore::{RestoreError, try_restore_from_backend};

/// How a thread came to be
#[derive(Debug)]
pub enum ThreadState {
    /// Prior conversation rebuilt from backend history
    Restored,
    /// Intro sequence synthesized because nothing could be restored
    Fresh { cause: RestoreError },
}

impl ThreadState {
    pub fn is_restored(&self) -> bool {
        matches!(self, ThreadState::Restored)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreadState::Restored => "restored",
            ThreadState::Fresh { .. } => "fresh",
        }
    }
}

/// A freshly initialized thread and how it was produced
#[derive(Debug)]
pub struct InitializedThread {
    pub state: ThreadState,
    pub messages: Vec<MessageRecord>,
}

/// Initialize the thread, keeping the reason a restore did not happen
pub fn chat_init_with_state<S: AsRef<str>>(
    welcome_message: Option<&str>,
    system_role: Option<&str>,
    example_prompts: &[S],
    chat_id: Option<&str>,
    chat_history: &[ChatHistoryEntry],
    last_response: Option<&LastResponse>,
    options: &ChatOptions,
) -> InitializedThread {
    if options.debug_mode {
        debug!("chat_init() chat_id={:?} history_len={}", chat_id, chat_history.len());
    }

    match try_restore_from_backend(chat_history, last_response, options) {
        Ok(messages) => InitializedThread { state: ThreadState::Restored, messages },
        Err(cause) => {
            if !matches!(cause, RestoreError::NoHistory) {
                error!("chat_init() restore failed, starting fresh: {}", cause);
            }
            InitializedThread {
                state: ThreadState::Fresh { cause },
                messages: chat_intro(welcome_message, system_role, example_prompts),
            }
        }
    }
}

/// Initialize the thread: restore history when possible, otherwise the intro sequence
///
/// `chat_id` identifies the session; it is logged in debug mode and otherwise unused.
/// The result is never empty.
pub fn chat_init<S: AsRef<str>>(
    welcome_message: Option<&str>,
    system_role: Option<&str>,
    example_prompts: &[S],
    chat_id: Option<&str>,
    chat_history: &[ChatHistoryEntry],
    last_response: Option<&LastResponse>,
    options: &ChatOptions,
) -> Vec<MessageRecord> {
    chat_init_with_state(
        welcome_message,
        system_role,
        example_prompts,
        chat_id,
        chat_history,
        last_response,
        options,
    )
    .messages
}

/// Initialize the thread straight from a config payload
pub fn chat_init_from_config(config: &ChatConfig, options: &ChatOptions) -> InitializedThread {
    let chatbot = &config.chatbot;
    let chat_id = Some(config.session_key.as_str()).filter(|key| !key.is_empty());

    chat_init_with_state(
        chatbot.app_welcome_message.as_deref(),
        chatbot.default_system_role.as_deref(),
        chatbot.app_example_prompts.as_slice(),
        chat_id,
        &config.history.chat_history,
        None,
        options,
    )
}
