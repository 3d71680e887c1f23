use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use crate::error::{CoreError, CoreResult};

use super::model::{
    CoercionOutcome, SanitizedMockup, DEFAULT_CSS, DEFAULT_HTML, FALLBACK_CSS, FALLBACK_HTML,
};
use super::normalize::normalize_field;

/// Assemble the complete two-field document from a coercion outcome,
/// normalizing present fields and defaulting absent ones.
pub fn assemble_mockup(outcome: &CoercionOutcome) -> SanitizedMockup {
    let candidate = match outcome {
        CoercionOutcome::Structured(c) | CoercionOutcome::Extracted(c) => c,
        CoercionOutcome::Failed => return SanitizedMockup::error_fallback(),
    };
    SanitizedMockup {
        html: candidate
            .html
            .as_deref()
            .map(normalize_field)
            .unwrap_or_else(|| DEFAULT_HTML.to_string()),
        css: candidate
            .css
            .as_deref()
            .map(normalize_field)
            .unwrap_or_else(|| DEFAULT_CSS.to_string()),
    }
}

/// Serialize the document with `", "` and `": "` separators. Non-ASCII
/// characters are written literally, not as `\uXXXX` escapes.
pub fn render_mockup_json(mockup: &SanitizedMockup) -> CoreResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    mockup.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| CoreError::InvalidInput(format!("serializer produced non-UTF-8 bytes: {e}")))
}

/// The total-failure document. Built from the fallback constants directly so
/// this path cannot itself fail; the constants contain no characters that
/// need escaping.
pub fn error_document_json() -> String {
    format!(r#"{{"html": "{FALLBACK_HTML}", "css": "{FALLBACK_CSS}"}}"#)
}

/// Compact JSON with a space after `,` and `:`, matching the byte layout the
/// consuming front ends already compare against.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}
