use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::models::ChatHistoryEntry;

/// Custom deserializer for timestamp that accepts both integers (ms) and RFC3339 strings
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => {
            // Assume it's a Unix timestamp in milliseconds
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(Error::custom("timestamp must be a number or string")),
    }
}

/// Treats an explicit `null` the same as a missing field
///
/// The config endpoint sends `null` for empty collections and unset flags.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads `chat_history` one entry at a time
///
/// An entry that is not an object, or whose `role` is missing or not a string,
/// becomes [`ChatHistoryEntry::unreadable`] so restore skips and counts it
/// instead of the whole config being rejected.
pub fn deserialize_history_entries<'de, D>(deserializer: D) -> Result<Vec<ChatHistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Value> = deserialize_null_default(deserializer)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).unwrap_or_else(|e| {
                warn!("Unreadable chat history entry at index {}: {}", index, e);
                ChatHistoryEntry::unreadable()
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::{ChatConfig, ChatHistory, MessageRecord};

    #[test]
    fn test_record_sent_time_integer() {
        let json = r#"{
            "content": "hello",
            "direction": "incoming",
            "sender": "assistant",
            "sentTime": 1762076480016,
            "display": true
        }"#;

        let record: MessageRecord = serde_json::from_str(json).unwrap();
        let expected_ts = DateTime::from_timestamp_millis(1762076480016).unwrap();
        assert_eq!(record.sent_time, expected_ts);
        assert!(record.original_message.is_none());
    }

    #[test]
    fn test_record_sent_time_rfc3339() {
        let json = r#"{
            "content": "hello",
            "direction": "outgoing",
            "sender": "user",
            "sentTime": "2025-11-02T09:41:20.016Z",
            "display": true,
            "originalMessage": {"role": "user", "content": "hello"}
        }"#;

        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sent_time.to_rfc3339(), "2025-11-02T09:41:20.016+00:00");
    }

    #[test]
    fn test_record_sent_time_rejects_bool() {
        let json = r#"{
            "content": null,
            "direction": "incoming",
            "sender": "smarter",
            "sentTime": true,
            "display": false
        }"#;

        let err = serde_json::from_str::<MessageRecord>(json).unwrap_err();
        assert!(err.to_string().contains("timestamp must be a number or string"));
    }

    #[test]
    fn test_null_collections_become_empty() {
        let json = r#"{
            "chatbot": {"app_example_prompts": null, "app_file_attachment": null},
            "plugins": {"plugins": null}
        }"#;

        let config: ChatConfig = serde_json::from_str(json).unwrap();
        assert!(config.chatbot.app_example_prompts.is_empty());
        assert!(!config.chatbot.app_file_attachment);
        assert!(config.plugins.plugins.is_empty());
    }

    #[test]
    fn test_history_entries_null_is_empty() {
        let history: ChatHistory = serde_json::from_str(r#"{"chat_history": null}"#).unwrap();
        assert!(history.chat_history.is_empty());
    }

    #[test]
    fn test_history_entries_keep_position_of_unreadable_entries() {
        let json = r#"{"chat_history": [null, {"role": "tool", "content": {"temp": 21}}, {"role": false}]}"#;
        let history: ChatHistory = serde_json::from_str(json).unwrap();

        assert_eq!(history.chat_history.len(), 3);
        assert!(history.chat_history[0].role.is_empty());
        assert_eq!(history.chat_history[1].role, "tool");
        assert!(history.chat_history[2].role.is_empty());
    }
}
