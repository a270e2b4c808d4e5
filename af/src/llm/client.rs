//! LLM client trait

use async_trait::async_trait;

use super::LlmError;

/// A provider that turns a prompt into generated text
///
/// Implementations own transport, authentication and retries; callers
/// only see the reply text or a typed error. Everything downstream of
/// this trait (extraction, demultiplexing) is provider-agnostic.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate content for a prompt, returning the full reply text
    async fn generate_content(&self, prompt: &str) -> Result<String, LlmError>;
}
