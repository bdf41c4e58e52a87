use async_trait::async_trait;

use crate::DomainError;

/// Remote text-generation capability (a chat-completion style LLM).
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one system + user exchange and returns the raw reply text.
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, DomainError>;
}
