use base64::{engine::general_purpose, Engine as _};

use crate::error::{CoreError, CoreResult};

pub mod anthropic;

pub use anthropic::AnthropicVisionClient;

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Seam between the request workflows and whichever hosted model backs them.
/// Constructed by the binary and passed in explicitly; the sanitization
/// pipeline itself takes no dependency on it.
pub trait DesignModelClient {
    /// Send one prompt plus a base64-encoded design image, returning the
    /// model's reply text.
    fn invoke(&self, prompt: &str, image_b64: &str) -> CoreResult<String>;
}

/// Connection settings for a hosted vision model.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ClientConfig {
    /// Read the key from the process environment; everything else defaults.
    pub fn from_env() -> CoreResult<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| CoreError::InvalidInput("ANTHROPIC_API_KEY is not set".to_string()))?;
        Ok(ClientConfig {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        })
    }
}

pub fn encode_image_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}
