//! Message thread construction and maintenance
//!
//! The thread is an ordered list of [`MessageRecord`](crate::models::MessageRecord)s.
//! It is built once per config fetch and then appended to as the user chats:
//!
//! - [`factory`] - Builds display-ready records (markdown links become anchors)
//! - [`request`] - Shapes the thread into `{role, content}` request messages
//! - [`restore`] - Rebuilds a thread from persisted backend history
//! - [`intro`] - Synthesizes the greeting thread when there is no history
//! - [`init`] - Restore first, intro as fallback
//! - [`metadata`] - Shows or hides backend metadata records
//! - [`response`] - Maps prompt responses back into records
//! - [`sanitize`] - Cleans up user input before it enters the thread
//! - [`session`] - Owns the thread for one widget instance
//!
//! None of these functions fail: problems are logged and degrade into a
//! smaller but valid thread.

pub mod factory;
pub mod init;
pub mod intro;
pub mod metadata;
pub mod request;
pub mod response;
pub mod restore;
pub mod sanitize;
pub mod session;

pub use factory::{convert_markdown_links_to_html, markdown_links_to_html, message_factory};
pub use init::{InitializedThread, ThreadState, chat_init, chat_init_from_config, chat_init_with_state};
pub use intro::{chat_intro, example_prompts_block};
pub use metadata::{toggle_metadata, visible_messages};
pub use request::chat_messages_to_request_messages;
pub use response::messages_from_response;
pub use restore::{RestoreError, chat_restore_from_backend, try_restore_from_backend};
pub use sanitize::sanitize_prompt;
pub use session::ChatSession;
