use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::llm::{encode_image_base64, DesignModelClient};

use super::coercion::coerce_reply;
use super::model::CoercionTier;
use super::prompts;
use super::render::{assemble_mockup, error_document_json, render_mockup_json};

/// Result of sanitizing one raw model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Valid JSON text with exactly the keys `html` and `css`.
    pub json: String,
    pub tier: CoercionTier,
}

/// Response envelope for a full design analysis. The `mockup` field holds the
/// sanitized document verbatim as a JSON-encoded string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesignAnalysisResponse {
    pub status: String,
    pub analysis: String,
    pub mockup: String,
}

/// Turn an arbitrary model reply into a well-formed two-field mockup
/// document.
///
/// Total over its input: any string (empty, prose, malformed JSON, binary
/// noise) yields valid JSON with both keys present, never an error. A
/// serialization fault inside the pipeline degrades to the static error
/// document rather than escaping to the caller.
pub fn sanitize_model_reply(raw: &str) -> SanitizeReport {
    let outcome = coerce_reply(raw);
    let tier = outcome.tier();
    let mockup = assemble_mockup(&outcome);
    match render_mockup_json(&mockup) {
        Ok(json) => SanitizeReport { json, tier },
        Err(_) => SanitizeReport {
            json: error_document_json(),
            tier: CoercionTier::Failed,
        },
    }
}

/// Run the two-call analysis workflow: a principles critique of the uploaded
/// design, then a mockup generation pass whose reply goes through the
/// sanitizer. Model-call failures propagate; sanitization never does.
pub fn analyze_design(
    client: &dyn DesignModelClient,
    image_bytes: &[u8],
    research_text: Option<&str>,
    reference_description: Option<&str>,
) -> CoreResult<DesignAnalysisResponse> {
    let image_b64 = encode_design_image(image_bytes)?;

    let analysis_prompt = prompts::build_analysis_prompt(research_text, reference_description);
    let analysis = client.invoke(&analysis_prompt, &image_b64)?;

    let mockup_reply = client.invoke(prompts::MOCKUP_GENERATION_PROMPT, &image_b64)?;
    let mockup = sanitize_model_reply(&mockup_reply);

    Ok(DesignAnalysisResponse {
        status: "success".to_string(),
        analysis,
        mockup: mockup.json,
    })
}

/// Ask for 3-5 real-world designs with similar layout, color, and purpose.
pub fn find_similar_designs(
    client: &dyn DesignModelClient,
    image_bytes: &[u8],
) -> CoreResult<String> {
    let image_b64 = encode_design_image(image_bytes)?;
    client.invoke(prompts::SIMILAR_DESIGNS_PROMPT, &image_b64)
}

/// Ask for visually similar existing sites or apps.
pub fn find_visual_matches(
    client: &dyn DesignModelClient,
    image_bytes: &[u8],
) -> CoreResult<String> {
    let image_b64 = encode_design_image(image_bytes)?;
    client.invoke(prompts::VISUAL_SIMILARITY_PROMPT, &image_b64)
}

fn encode_design_image(image_bytes: &[u8]) -> CoreResult<String> {
    if image_bytes.is_empty() {
        return Err(CoreError::InvalidInput("empty design image".to_string()));
    }
    Ok(encode_image_base64(image_bytes))
}
