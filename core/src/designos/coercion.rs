use regex::Regex;
use serde_json::{Map, Value};

use super::model::{CoercionOutcome, MockupCandidate};

/// Remove control characters (U+0000-U+001F and U+007F-U+009F) from a reply
/// before the strict parse. Models routinely leave literal newlines inside
/// string values, which is invalid JSON; stripping them first recovers those
/// replies without touching the visible text.
pub fn strip_control_chars(raw: &str) -> String {
    let re = Regex::new(r"[\x00-\x1F\x7F-\x9F]").unwrap_or_else(|_| Regex::new("^$").unwrap());
    re.replace_all(raw, "").into_owned()
}

/// Coerce a raw model reply into candidate `html`/`css` values.
///
/// Tier 1 strips control characters and parses strictly. Tier 2 runs only on
/// a decode failure and pattern-matches the original text for both keys. A
/// reply that parses to a non-object, or an object whose `html`/`css` member
/// is not a string, is structurally unusable and maps to `Failed` rather than
/// falling through to the pattern tier.
pub fn coerce_reply(raw: &str) -> CoercionOutcome {
    let cleaned = strip_control_chars(raw);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) => match (string_member(&map, "html"), string_member(&map, "css")) {
            (Some(html), Some(css)) => CoercionOutcome::Structured(MockupCandidate { html, css }),
            _ => CoercionOutcome::Failed,
        },
        Ok(_) => CoercionOutcome::Failed,
        Err(_) => extract_fields(raw),
    }
}

/// `Some(None)` when the key is absent, `Some(Some(_))` when it holds a
/// string, `None` when it holds anything else.
fn string_member(map: &Map<String, Value>, key: &str) -> Option<Option<String>> {
    match map.get(key) {
        None => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}

/// Pattern tier: both keys must be found or the reply is unusable. Recovering
/// one field while dropping the other is deliberately not attempted.
fn extract_fields(raw: &str) -> CoercionOutcome {
    match (capture_quoted_value(raw, "html"), capture_quoted_value(raw, "css")) {
        (Some(html), Some(css)) => CoercionOutcome::Extracted(MockupCandidate {
            html: Some(html),
            css: Some(css),
        }),
        _ => CoercionOutcome::Failed,
    }
}

/// First `"key": "..."` occurrence in the text. The captured value keeps any
/// escape sequences exactly as written; serialization escapes the backslashes
/// again downstream.
fn capture_quoted_value(raw: &str, key: &str) -> Option<String> {
    let pattern = format!(r#""{key}"\s*:\s*"((?:[^"\\]|\\.)*)""#);
    let re = Regex::new(&pattern).unwrap_or_else(|_| Regex::new("^$").unwrap());
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
