//! Fixed prompt text sent alongside uploaded designs. Kept verbatim: the
//! sanitization tiers downstream are tuned to what these prompts ask for
//! (single-line JSON, escaped quotes, no control characters).

pub const DESIGN_PRINCIPLES: &str = "\
Analyze this design based on the following principles:
1. Visual Hierarchy
2. Balance and Alignment
3. Color Theory and Contrast
4. Typography and Readability
5. White Space Usage
6. Consistency
7. Accessibility

Consider any provided research documents and user requirements while analyzing.
Provide specific, actionable improvements for each relevant principle.
";

pub const MOCKUP_GENERATION_PROMPT: &str = "\
Based on the provided design and considering any research documents and reference designs, generate a detailed HTML and CSS mockup that incorporates the suggested improvements. The mockup should:

1. Maintain the core elements and purpose of the original design
2. Apply the suggested improvements from the analysis
3. Use modern, responsive design practices
4. Follow accessibility guidelines
5. Include appropriate color schemes and typography

Return a JSON object with two fields:
- \"html\": containing the HTML code (without DOCTYPE declaration)
- \"css\": containing the CSS code

Important formatting rules:
1. Use double quotes for JSON strings
2. Escape all double quotes in HTML/CSS with backslash (\\\")
3. Remove all newlines from HTML and CSS
4. Remove any control characters
5. Keep HTML/CSS minimal and valid
6. Do not include DOCTYPE, html, head, or body tags
7. Focus on the core UI components

Example response format:
{\"html\":\"<div class=\\\"container\\\"><h1>Title</h1><p>Content</p></div>\",\"css\":\".container{max-width:1200px;margin:0 auto}h1{color:#333}\"}

Note: The response must be a single-line, valid JSON string with properly escaped quotes and no control characters.
";

pub const SIMILAR_DESIGNS_PROMPT: &str = "\
Analyze this design and suggest 3-5 similar real-world examples of UI designs or websites that share similar:
1. Layout patterns
2. Color schemes
3. Visual style
4. Purpose/functionality

For each example, provide:
- Name/URL of the website or app
- Brief explanation of why it's similar
- Key design elements that match
";

pub const VISUAL_SIMILARITY_PROMPT: &str = "\
Based on this design's visual characteristics, suggest 3-5 existing websites or apps that have a similar visual appearance. Focus on:
1. Overall layout and composition
2. Color palette and visual style
3. Design elements (buttons, cards, navigation, etc.)

For each suggestion, provide:
- Website/app name and URL
- Screenshot URL (if available)
- Brief description of visual similarities
";

/// Analysis prompt with optional research text and reference change notes
/// appended. Blank supplements are skipped entirely.
pub fn build_analysis_prompt(
    research_text: Option<&str>,
    reference_description: Option<&str>,
) -> String {
    let mut prompt = DESIGN_PRINCIPLES.to_string();
    if let Some(research) = research_text.filter(|t| !t.trim().is_empty()) {
        prompt.push_str("\n\nConsider the following research while analyzing the design:\n");
        prompt.push_str(research);
    }
    if let Some(reference) = reference_description.filter(|t| !t.trim().is_empty()) {
        prompt.push_str("\n\nConsider these specific change requirements:\n");
        prompt.push_str(reference);
    }
    prompt
}
