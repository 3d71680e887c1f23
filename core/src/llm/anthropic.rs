use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};

use super::{ClientConfig, DesignModelClient};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Blocking messages-API client sending one text block and one base64 image
/// block per request. No retries; a failed call surfaces as a model-request
/// error for the front end to report.
pub struct AnthropicVisionClient {
    http: Client,
    config: ClientConfig,
}

impl AnthropicVisionClient {
    pub fn new(config: ClientConfig) -> Self {
        AnthropicVisionClient {
            http: Client::new(),
            config,
        }
    }
}

impl DesignModelClient for AnthropicVisionClient {
    fn invoke(&self, prompt: &str, image_b64: &str) -> CoreResult<String> {
        let payload = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": prompt },
                        {
                            "type": "image",
                            "source": {
                                "type": "base64",
                                "media_type": "image/jpeg",
                                "data": image_b64
                            }
                        }
                    ]
                }
            ]
        });

        let response = self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(CoreError::ModelRequest(format!("HTTP {status}: {body}")));
        }

        let value: Value = response.json()?;
        reply_text(&value).ok_or_else(|| {
            CoreError::ModelRequest("no text content in model response".to_string())
        })
    }
}

fn reply_text(value: &Value) -> Option<String> {
    let blocks = value.get("content")?.as_array()?;
    for block in blocks {
        if block.get("type").and_then(|v| v.as_str()) == Some("text") {
            if let Some(text) = block.get("text").and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }
    None
}
