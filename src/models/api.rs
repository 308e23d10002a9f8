use serde::{Deserialize, Serialize};
use serde_json::Value;

/// OpenAI-style completion body: `{"choices": [{"message": {...}}]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl LastResponse {
    /// Build a single-choice response carrying an assistant message
    pub fn with_content(content: &str) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    role: Some("assistant".to_string()),
                    content: Some(Value::String(content.to_string())),
                    extra: serde_json::Map::new(),
                }),
            }],
        }
    }

    /// Message of the first choice when it carries usable content
    pub fn first_message(&self) -> Option<&ChoiceMessage> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .filter(|message| message.content.as_ref().is_some_and(is_present))
    }
}

/// Decoded body of a successful prompt request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptResponse {
    #[serde(default)]
    pub smarter: SmarterPayload,
    #[serde(flatten)]
    pub completion: LastResponse,
}

/// Smarter-specific section of a prompt response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmarterPayload {
    #[serde(default)]
    pub messages: Vec<ResponseMessage>,
}

/// One message returned by the prompt endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ChoiceMessage {
    /// The message as a JSON object, used as the original of a thread record
    pub fn to_value(&self) -> Value {
        message_value(self.role.as_deref(), self.content.as_ref(), &self.extra)
    }
}

impl ResponseMessage {
    /// The message as a JSON object, used as the original of a thread record
    pub fn to_value(&self) -> Value {
        message_value(Some(&self.role), self.content.as_ref(), &self.extra)
    }
}

/// Object form of a `{role, content, ...extra}` message, matching its serde output
pub(crate) fn message_value(
    role: Option<&str>,
    content: Option<&Value>,
    extra: &serde_json::Map<String, Value>,
) -> Value {
    let mut object = extra.clone();
    object.insert("role".to_string(), role.map_or(Value::Null, |r| Value::String(r.to_string())));
    object.insert("content".to_string(), content.cloned().unwrap_or(Value::Null));
    Value::Object(object)
}

/// Truthiness of a JSON value the way the widget treats message content
///
/// `null`, `false`, `""` and numeric zero are absent. Arrays and objects are
/// present even when empty.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
