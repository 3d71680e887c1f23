use serde::{Deserialize, Serialize};

/// Substituted when a parsed reply carries no `html` member.
pub const DEFAULT_HTML: &str = "<div>No content</div>";

/// Substituted when a parsed reply carries no `css` member.
pub const DEFAULT_CSS: &str = "";

pub const FALLBACK_HTML: &str = "<div>Error generating mockup</div>";
pub const FALLBACK_CSS: &str = "div { color: red; }";

/// The two-field mockup document handed back to callers.
///
/// Field order matters: `html` must serialize before `css`. Both fields are
/// always present and hold no control characters or literal newlines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanitizedMockup {
    pub html: String,
    pub css: String,
}

impl SanitizedMockup {
    /// The static document substituted when every recovery tier fails.
    pub fn error_fallback() -> Self {
        SanitizedMockup {
            html: FALLBACK_HTML.to_string(),
            css: FALLBACK_CSS.to_string(),
        }
    }
}

/// Field values recovered from a model reply, before defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockupCandidate {
    pub html: Option<String>,
    pub css: Option<String>,
}

/// Which coercion tier produced the output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoercionTier {
    Structured,
    Extracted,
    Failed,
}

impl CoercionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoercionTier::Structured => "structured",
            CoercionTier::Extracted => "extracted",
            CoercionTier::Failed => "failed",
        }
    }
}

/// Outcome of the coercion stage, consumed exhaustively by the assembler.
///
/// `Structured` comes from a strict JSON parse, `Extracted` from the pattern
/// tier (which always yields both fields), `Failed` from neither tier
/// producing a usable mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionOutcome {
    Structured(MockupCandidate),
    Extracted(MockupCandidate),
    Failed,
}

impl CoercionOutcome {
    pub fn tier(&self) -> CoercionTier {
        match self {
            CoercionOutcome::Structured(_) => CoercionTier::Structured,
            CoercionOutcome::Extracted(_) => CoercionTier::Extracted,
            CoercionOutcome::Failed => CoercionTier::Failed,
        }
    }
}
