//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for chatbot config payloads written to a temp directory
pub struct ConfigBuilder {
    session_key: String,
    debug_mode: bool,
    app_name: String,
    version: Option<String>,
    provider: String,
    default_model: String,
    welcome_message: Option<String>,
    system_role: Option<String>,
    example_prompts: Vec<String>,
    history: Vec<Value>,
    total_plugins: u64,
    envelope: bool,
}

impl ConfigBuilder {
    /// Create a config with a welcome message, system role and no history
    pub fn new() -> Self {
        Self {
            session_key: "6f3c2a9e1b7d4c8f".to_string(),
            debug_mode: false,
            app_name: "Stackademy".to_string(),
            version: Some("0.2.0".to_string()),
            provider: "openai".to_string(),
            default_model: "gpt-4o-mini".to_string(),
            welcome_message: Some("Welcome to Stackademy!".to_string()),
            system_role: Some("You are a helpful assistant.".to_string()),
            example_prompts: Vec::new(),
            history: Vec::new(),
            total_plugins: 0,
            envelope: true,
        }
    }

    pub fn session_key(mut self, session_key: &str) -> Self {
        self.session_key = session_key.to_string();
        self
    }

    pub fn debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn welcome_message(mut self, welcome_message: &str) -> Self {
        self.welcome_message = Some(welcome_message.to_string());
        self
    }

    pub fn without_system_role(mut self) -> Self {
        self.system_role = None;
        self
    }

    pub fn example_prompt(mut self, prompt: &str) -> Self {
        self.example_prompts.push(prompt.to_string());
        self
    }

    /// Append a persisted history entry
    pub fn history_entry(mut self, role: &str, content: &str) -> Self {
        self.history.push(json!({"role": role, "content": content}));
        self
    }

    /// Append a raw history entry (for malformed or structured entries)
    pub fn raw_history_entry(mut self, entry: Value) -> Self {
        self.history.push(entry);
        self
    }

    pub fn plugins(mut self, total_plugins: u64) -> Self {
        self.total_plugins = total_plugins;
        self
    }

    /// Write the bare config object instead of the `{"data": ...}` envelope
    pub fn bare(mut self) -> Self {
        self.envelope = false;
        self
    }

    pub fn to_value(&self) -> Value {
        let config = json!({
            "debug_mode": self.debug_mode,
            "sandbox_mode": false,
            "session_key": self.session_key,
            "chatbot": {
                "id": 1,
                "name": "stackademy",
                "version": self.version,
                "provider": self.provider,
                "default_model": self.default_model,
                "default_system_role": self.system_role,
                "app_name": self.app_name,
                "app_assistant": "Sam",
                "app_welcome_message": self.welcome_message,
                "app_example_prompts": self.example_prompts,
                "app_placeholder": "Ask me anything...",
                "app_file_attachment": false,
                "url_chatbot": "https://stackademy.3141-5926-5359.api.smarter.sh/"
            },
            "history": {
                "chat_history": self.history,
                "chat_tool_call_history": [],
                "chat_plugin_usage_history": [],
                "chatbot_request_history": []
            },
            "meta_data": {"is_valid": true, "is_deployed": false},
            "plugins": {
                "meta_data": {
                    "total_plugins": self.total_plugins,
                    "plugins_returned": self.total_plugins
                },
                "plugins": []
            }
        });

        if self.envelope { json!({"data": config}) } else { config }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.to_value()).expect("Failed to serialize config")
    }

    /// Write the config into `dir` under `file_name`
    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        fs::write(&path, self.to_json()).expect("Failed to write config file");
        path
    }

    /// Write the config into a new temp directory as `config.json`
    pub fn build(self) -> ConfigFile {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = self.write_to(dir.path(), "config.json");
        ConfigFile { dir, path }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A config file on disk, removed when dropped
pub struct ConfigFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Prompt endpoint response envelope carrying the given smarter messages
pub fn prompt_response_body(messages: Value) -> String {
    let inner = json!({
        "choices": [{"message": {"role": "assistant", "content": "ok"}}],
        "smarter": {"messages": messages}
    });
    json!({"data": {"body": inner.to_string()}}).to_string()
}

/// Config with a realistic multi-turn history including tool and diagnostic messages
pub fn realistic_config() -> ConfigFile {
    ConfigBuilder::new()
        .example_prompt("What courses do you offer?")
        .history_entry("system", "You are a helpful assistant.")
        .history_entry("user", "What's the weather in Paris?")
        .history_entry("smarter", "Function get_current_weather() called")
        .raw_history_entry(json!({
            "role": "tool",
            "content": "{\"temperature\": 21, \"unit\": \"celsius\"}",
            "tool_call_id": "call_abc123",
            "name": "get_current_weather"
        }))
        .history_entry("assistant", "It's 21°C in Paris. See [forecast](https://weather.example/paris).")
        .plugins(3)
        .build()
}
