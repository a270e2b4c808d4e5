//! LLM boundary: provider client, reply parsing, code extraction

use std::sync::Arc;

use tracing::debug;

mod client;
mod error;
mod gemini;
mod parser;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use parser::{ProviderReply, extract_code};

use crate::config::LlmConfig;
use crate::prompts;

/// Create an LLM client based on the provider specified in config
///
/// Currently only "gemini" is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(LlmError::InvalidResponse(format!(
            "Unknown LLM provider: '{}'. Supported: gemini",
            other
        ))),
    }
}

/// Ask the provider for a complete single-file web application
///
/// Wraps the user's requirements in the embedded web-app prompt, so the
/// reply carries one self-contained document the demultiplexer can split.
/// Provider failures come back inside the reply, never as an `Err`.
pub async fn generate_web_app(llm: &Arc<dyn LlmClient>, user_prompt: &str) -> ProviderReply {
    debug!(prompt_len = user_prompt.len(), "generate_web_app: called");
    let prompt = prompts::web_app_prompt(user_prompt);
    ProviderReply::from_result(llm.generate_content(&prompt).await)
}
