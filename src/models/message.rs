use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which side of the conversation a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Author of a message record
///
/// `Smarter` marks backend diagnostic messages that are shown in the thread
/// but are never sent back to the prompt endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    System,
    Assistant,
    User,
    Tool,
    Smarter,
}

impl SenderRole {
    /// Roles the prompt endpoint accepts in a request
    pub const REQUEST_ROLES: [SenderRole; 4] =
        [SenderRole::System, SenderRole::Assistant, SenderRole::User, SenderRole::Tool];

    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::System => "system",
            SenderRole::Assistant => "assistant",
            SenderRole::User => "user",
            SenderRole::Tool => "tool",
            SenderRole::Smarter => "smarter",
        }
    }

    pub fn is_request_role(&self) -> bool {
        Self::REQUEST_ROLES.contains(self)
    }

    /// Backend-side messages that are hidden unless metadata is shown
    pub fn is_metadata(&self) -> bool {
        matches!(self, SenderRole::Smarter | SenderRole::System | SenderRole::Tool)
    }

    /// Direction a restored message takes in the thread: only the end user is outgoing
    pub fn direction(&self) -> MessageDirection {
        match self {
            SenderRole::User => MessageDirection::Outgoing,
            _ => MessageDirection::Incoming,
        }
    }
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sender role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for SenderRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(SenderRole::System),
            "assistant" => Ok(SenderRole::Assistant),
            "user" => Ok(SenderRole::User),
            "tool" => Ok(SenderRole::Tool),
            "smarter" => Ok(SenderRole::Smarter),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// A display-ready unit of the chat thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    /// Text or structured payload. `None` means there is nothing to render.
    pub content: Option<Value>,
    pub direction: MessageDirection,
    pub sender: SenderRole,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub sent_time: DateTime<Utc>,
    pub display: bool,
    /// Raw backend object this record was built from. `None` means the record
    /// is its own source.
    #[serde(default)]
    pub original_message: Option<Value>,
}

impl MessageRecord {
    /// Text content, if the record carries a string
    pub fn text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }

    pub fn has_displayable_content(&self) -> bool {
        matches!(self.content, Some(Value::String(_)))
    }
}

/// Minimal message shape the prompt endpoint expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: Value,
}
