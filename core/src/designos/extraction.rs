use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};

/// Text pulled from an uploaded research PDF, plus identity for the source
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchText {
    pub artifact_id: String,
    pub source_bytes_hash: String,
    pub text: String,
    pub page_count: usize,
}

/// Best-effort text extraction from research PDF bytes.
///
/// Walks text objects (BT..ET) and collects Tj show-text operands. Scanned or
/// image-only PDFs yield no text and are reported as a content-extraction
/// failure; callers degrade to an empty research string.
pub fn extract_research_text(pdf_bytes: &[u8]) -> CoreResult<ResearchText> {
    if pdf_bytes.is_empty() {
        return Err(CoreError::InvalidInput("empty PDF bytes".to_string()));
    }
    if !pdf_bytes.starts_with(b"%PDF") {
        return Err(CoreError::InvalidInput("not a PDF stream".to_string()));
    }

    let source_bytes_hash = sha256_hex(pdf_bytes);
    let artifact_id = format!("a_research_{}", &source_bytes_hash[..8]);

    let text = collect_text_objects(&String::from_utf8_lossy(pdf_bytes));
    if text.trim().is_empty() {
        return Err(CoreError::ContentExtraction(
            "no text found in PDF".to_string(),
        ));
    }

    let page_count = String::from_utf8_lossy(pdf_bytes)
        .matches("/Type /Page")
        .count()
        .max(1);

    Ok(ResearchText {
        artifact_id,
        source_bytes_hash,
        text,
        page_count,
    })
}

/// Deterministic id for an uploaded design image, derived from its bytes.
pub fn design_artifact_id(image_bytes: &[u8]) -> String {
    format!("a_design_{}", &sha256_hex(image_bytes)[..8])
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn collect_text_objects(pdf_text: &str) -> String {
    let mut out = String::new();
    let mut in_text_object = false;
    let mut pending = String::new();

    for line in pdf_text.lines() {
        if line.contains("BT") {
            in_text_object = true;
            continue;
        }
        if line.contains("ET") {
            in_text_object = false;
            if !pending.is_empty() {
                out.push_str(&pending);
                out.push('\n');
                pending.clear();
            }
            continue;
        }
        if in_text_object && line.contains("Tj") {
            if let Some(operand) = tj_operand(line) {
                pending.push_str(operand);
                pending.push(' ');
            }
        }
    }

    out
}

/// Parenthesized operand of a Tj show-text operator, if the line has one.
fn tj_operand(line: &str) -> Option<&str> {
    let open = line.find('(')?;
    let close = line[open + 1..].find(')')?;
    Some(&line[open + 1..open + 1 + close])
}
