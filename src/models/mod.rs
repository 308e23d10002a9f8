//! Data models for the chat widget.
//!
//! This module defines the data structures shared by the thread logic and the
//! backend boundary:
//!
//! - [`MessageRecord`] - Display-ready unit of the chat thread
//! - [`RequestMessage`] - `{role, content}` shape sent to the prompt endpoint
//! - [`ChatConfig`] - Chatbot configuration and persisted history from the config endpoint
//! - [`LastResponse`] / [`PromptResponse`] - Bodies returned by the prompt endpoint
//!
//! These models use serde for JSON (de)serialization with custom deserializers
//! for lenient fields (timestamps, nullable collections) in the `deserializers` module.

pub mod api;
pub mod config;
pub mod message;

pub use api::{Choice, ChoiceMessage, LastResponse, PromptResponse, ResponseMessage, SmarterPayload};
pub use config::{
    ChatConfig, ChatHistory, ChatHistoryEntry, ChatbotConfig, ConfigMetadata, PluginsConfig,
    PluginsMetadata,
};
pub use message::{MessageDirection, MessageRecord, RequestMessage, SenderRole, UnknownRole};
