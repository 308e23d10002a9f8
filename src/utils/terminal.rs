//! Terminal output sanitization for message content
//!
//! Message content comes from the backend and from end users, so the CLI never
//! writes it to the terminal verbatim. [`sanitize_for_terminal`] removes ANSI
//! escape sequences and stray control characters, and [`anchors_to_plain`]
//! turns the `<a href>` tags produced by link conversion back into readable text.

use once_cell::sync::Lazy;
use regex::Regex;

static CSI_SEQUENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("valid CSI regex"));

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]*)">([^<]*)</a>"#).expect("valid anchor regex"));

/// Strips ANSI CSI sequences and control characters other than tab, newline and carriage return
///
/// # Examples
///
/// ```
/// use smarter_chat::utils::terminal::sanitize_for_terminal;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(sanitize_for_terminal(text), "Red text");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    CSI_SEQUENCE_RE
        .replace_all(text, "")
        .chars()
        .filter(|ch| !ch.is_control() || matches!(ch, '\t' | '\n' | '\r'))
        .collect()
}

/// Renders `<a href="url">text</a>` as `text (url)`
///
/// # Examples
///
/// ```
/// use smarter_chat::utils::terminal::anchors_to_plain;
///
/// let html = r#"See <a href="https://smarter.sh">the docs</a>"#;
/// assert_eq!(anchors_to_plain(html), "See the docs (https://smarter.sh)");
/// ```
pub fn anchors_to_plain(text: &str) -> String {
    ANCHOR_RE.replace_all(text, "${2} (${1})").into_owned()
}
