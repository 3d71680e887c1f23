use design_core::designos::extraction::{design_artifact_id, extract_research_text};
use design_core::designos::workflow::{analyze_design, find_similar_designs, find_visual_matches};
use design_core::error::CoreResult;
use design_core::llm::{AnthropicVisionClient, ClientConfig};
use serde_json::json;

const USAGE: &str = "usage: design_runner <analyze|similar|visual> <image> [research.pdf] [reference notes]";

// Thin front end over design_core: uploads a design image to the hosted
// model and prints the response envelope as JSON. ANTHROPIC_API_KEY must be
// set in the environment.
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (command, image_path) = match (args.get(1), args.get(2)) {
        (Some(c), Some(p)) => (c.as_str(), p.as_str()),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let image_bytes = match std::fs::read(image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("DESIGN_RUNNER read {}: {}", image_path, e);
            std::process::exit(2);
        }
    };
    eprintln!(
        "DESIGN_RUNNER artifact={} bytes={}",
        design_artifact_id(&image_bytes),
        image_bytes.len()
    );

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("DESIGN_RUNNER config: {}", e);
            std::process::exit(2);
        }
    };
    let client = AnthropicVisionClient::new(config);

    let result: CoreResult<serde_json::Value> = match command {
        "analyze" => {
            let research_text = args.get(3).and_then(|path| read_research(path));
            let reference_description = args.get(4).map(String::as_str);
            analyze_design(
                &client,
                &image_bytes,
                research_text.as_deref(),
                reference_description,
            )
            .map(|response| json!(response))
        }
        "similar" => find_similar_designs(&client, &image_bytes)
            .map(|text| json!({ "status": "success", "similar_designs": text })),
        "visual" => find_visual_matches(&client, &image_bytes)
            .map(|text| json!({ "status": "success", "visual_matches": text })),
        other => {
            eprintln!("DESIGN_RUNNER unknown command {:?}\n{USAGE}", other);
            std::process::exit(2);
        }
    };

    match result {
        Ok(envelope) => println!("{}", envelope),
        Err(e) => {
            println!("{}", json!({ "status": "error", "message": e.to_string() }));
            std::process::exit(1);
        }
    }
}

// Research extraction is best-effort: a warning and an empty supplement, not
// a failed run.
fn read_research(path: &str) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("DESIGN_RUNNER research read {}: {}", path, e);
            return None;
        }
    };
    match extract_research_text(&bytes) {
        Ok(research) => {
            eprintln!(
                "DESIGN_RUNNER research artifact={} pages={}",
                research.artifact_id, research.page_count
            );
            Some(research.text)
        }
        Err(e) => {
            eprintln!("DESIGN_RUNNER research extraction: {}", e);
            None
        }
    }
}
