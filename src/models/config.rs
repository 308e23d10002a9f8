use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::api::message_value;

/// Chatbot configuration payload returned by the backend config endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub sandbox_mode: bool,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub session_key: String,
    #[serde(default)]
    pub chatbot: ChatbotConfig,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub history: ChatHistory,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub meta_data: ConfigMetadata,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub provider: Option<String>,
    pub default_model: Option<String>,
    pub default_system_role: Option<String>,
    pub default_temperature: Option<f64>,
    pub default_max_tokens: Option<u64>,
    pub app_name: Option<String>,
    pub app_assistant: Option<String>,
    pub app_welcome_message: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub app_example_prompts: Vec<String>,
    pub app_placeholder: Option<String>,
    pub app_info_url: Option<String>,
    pub app_background_image_url: Option<String>,
    pub app_logo_url: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub app_file_attachment: bool,
    pub url_chatbot: Option<String>,
}

/// One persisted turn of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub role: String,
    #[serde(default)]
    pub content: Option<Value>,
    /// Backend bookkeeping fields (e.g. `smarter_is_new`) carried through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ChatHistoryEntry {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: Some(Value::String(content.to_string())),
            extra: serde_json::Map::new(),
        }
    }

    /// Stand-in for an entry that could not be read; its empty role matches no sender
    pub fn unreadable() -> Self {
        Self { role: String::new(), content: None, extra: serde_json::Map::new() }
    }

    /// The entry as a JSON object, used as the original of a restored record
    pub fn to_value(&self) -> Value {
        message_value(Some(&self.role), self.content.as_ref(), &self.extra)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatHistory {
    pub chat: Option<Value>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_history_entries")]
    pub chat_history: Vec<ChatHistoryEntry>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub chat_tool_call_history: Vec<Value>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub chat_plugin_usage_history: Vec<Value>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub chatbot_request_history: Vec<Value>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub plugin_selector_history: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigMetadata {
    pub url: Option<String>,
    pub session_key: Option<String>,
    pub chatbot_id: Option<u64>,
    pub chatbot_name: Option<String>,
    pub environment: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub is_valid: bool,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub is_deployed: bool,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub is_authentication_required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub meta_data: PluginsMetadata,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_null_default")]
    pub plugins: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsMetadata {
    pub total_plugins: u64,
    pub plugins_returned: u64,
}

impl ChatConfig {
    /// Header title, e.g. "Stackademy v0.2.0"
    pub fn title(&self) -> String {
        let app_name = self.chatbot.app_name.as_deref().unwrap_or_default();
        let version = self.chatbot.version.as_deref().filter(|v| !v.is_empty()).unwrap_or("1.0.0");
        format!("{} v{}", app_name, version)
    }

    /// Header info line: provider, model and plugin count
    pub fn info(&self) -> String {
        let mut info = format!(
            "{} {}",
            self.chatbot.provider.as_deref().unwrap_or_default(),
            self.chatbot.default_model.as_deref().unwrap_or_default()
        );
        let total_plugins = self.plugins.meta_data.total_plugins;
        if total_plugins > 0 {
            info.push_str(&format!(" with {} additional plugins", total_plugins));
        }
        info
    }
}
