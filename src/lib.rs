//! Smarter Chat - message thread core for the embeddable Smarter chat widget
//!
//! This library holds the logic a chat widget needs between the backend's JSON
//! contract and the rendered chat window. It supports:
//!
//! - Building display-ready message records (markdown links become HTML anchors)
//! - Restoring a thread from persisted chat history, or synthesizing an intro thread
//! - Shaping the thread into `{role, content}` request messages for the prompt endpoint
//! - Mapping prompt responses back into records and toggling metadata visibility
//! - Loading the chatbot config payload with a typed schema
//!
//! Rendering and the HTTP transport are left to the host.
//!
//! # Example
//!
//! ```no_run
//! use smarter_chat::{ChatOptions, ChatSession, parse_config_file};
//! use std::path::PathBuf;
//!
//! let config = parse_config_file(&PathBuf::from("config.json"))?;
//! let mut session = ChatSession::from_config(config, ChatOptions::default(), false);
//! if let Some(requests) = session.submit_prompt("What is Smarter?") {
//!     println!("Sending {} messages", requests.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cli;
pub mod models;
pub mod options;
pub mod parsers;
pub mod thread;
pub mod utils;

// Re-export commonly used types
pub use models::{MessageDirection, MessageRecord, RequestMessage, SenderRole};
pub use options::ChatOptions;
pub use parsers::config::parse_config_file;
pub use thread::{
    ChatSession, chat_init, chat_intro, chat_messages_to_request_messages,
    chat_restore_from_backend, message_factory,
};
