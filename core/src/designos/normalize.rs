use regex::Regex;

/// Collapse every whitespace run (newlines and tabs included) to a single
/// ASCII space and trim the ends. Idempotent: a normalized value passes
/// through unchanged. JSON escaping is not applied here; the assembler
/// escapes exactly once at serialization time.
pub fn normalize_field(value: &str) -> String {
    let re = Regex::new(r"\s+").unwrap_or_else(|_| Regex::new("^$").unwrap());
    re.replace_all(value.trim(), " ").into_owned()
}
