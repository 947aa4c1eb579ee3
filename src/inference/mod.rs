pub mod gemini;

pub use gemini::GeminiClient;

/// Anything that turns a system instruction plus a prompt into generated text.
///
/// One call, one answer: no retries, no streaming, no partial results.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system_instruction: &str, prompt: &str) -> anyhow::Result<String>;
}
