use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value, json};

use crate::models::RequestMessage;

// Characters left as-is in a query value, matching URLSearchParams
const QUERY_VALUE_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'*');

/// Body of a prompt request: `{"<session cookie name>": session_key, "messages": [...]}`
pub fn prompt_request_body(
    messages: &[RequestMessage],
    session_cookie_name: &str,
    session_key: &str,
) -> Value {
    let mut body = Map::new();
    body.insert(session_cookie_name.to_string(), Value::String(session_key.to_string()));
    body.insert("messages".to_string(), json!(messages));
    Value::Object(body)
}

/// Body of a config request: `{"<session cookie name>": session_key}`
pub fn config_request_body(session_cookie_name: &str, session_key: &str) -> Value {
    let mut body = Map::new();
    body.insert(session_cookie_name.to_string(), Value::String(session_key.to_string()));
    Value::Object(body)
}

/// Config endpoint URL with the session key appended as a query parameter
///
/// The URL is returned unchanged when there is no session key yet.
///
/// # Examples
///
/// ```
/// use smarter_chat::api::config_request_url;
///
/// let url = config_request_url("https://example.3141-5926-5359.api.smarter.sh/config/", "session_key", "a b");
/// assert_eq!(url, "https://example.3141-5926-5359.api.smarter.sh/config/?session_key=a%20b");
/// ```
pub fn config_request_url(config_url: &str, session_cookie_name: &str, session_key: &str) -> String {
    if session_key.is_empty() {
        return config_url.to_string();
    }

    let (base, fragment) = match config_url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (config_url, None),
    };
    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut url = format!(
        "{}{}{}={}",
        base,
        separator,
        utf8_percent_encode(session_cookie_name, QUERY_VALUE_ENCODE_SET),
        utf8_percent_encode(session_key, QUERY_VALUE_ENCODE_SET)
    );
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
