//! Completion provider port trait
//!
//! Defines the interface for a chat-style text completion service.
//! Implementations are chosen once at startup: a configured provider
//! client or an unconfigured stand-in that refuses every call.

use async_trait::async_trait;

use crate::error::CompletionError;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether calls can reach a real provider
    fn is_configured(&self) -> bool;

    /// Run one completion with a system and a user prompt.
    ///
    /// Returns `Ok(None)` when the provider answered without any text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, CompletionError>;
}
