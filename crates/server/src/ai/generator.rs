//! Health summary generation

use async_trait::async_trait;
use health_summary_core::{SummaryInput, compile_prompt};

use super::client::PlatformError;
use crate::config::ProjectCredentials;

/// Model used for every summary
pub const SUMMARY_MODEL: &str = "gpt-4.1-mini";

/// Text generation capability of the AI platform
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        credentials: &ProjectCredentials,
        prompt: &str,
        model: &str,
    ) -> Result<String, PlatformError>;
}

/// Compile the prompt for `input` and request a single completion
pub async fn generate_summary(
    generator: &dyn TextGenerator,
    credentials: &ProjectCredentials,
    input: &SummaryInput,
) -> Result<String, PlatformError> {
    let prompt = compile_prompt(input);

    tracing::debug!(prompt_bytes = prompt.len(), model = SUMMARY_MODEL, "Requesting summary");

    generator.generate(credentials, &prompt, SUMMARY_MODEL).await
}
