use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));

/// Clean up text typed or pasted into the input box
///
/// Pasting tends to bring HTML span tags along, which the prompt endpoint
/// cannot handle, so every tag is removed. Returns `None` when nothing but
/// whitespace is left.
pub fn sanitize_prompt(input: &str) -> Option<String> {
    let sanitized = HTML_TAG_RE.replace_all(input, "");
    if sanitized.trim().is_empty() { None } else { Some(sanitized.into_owned()) }
}
