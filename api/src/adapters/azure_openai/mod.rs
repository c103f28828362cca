//! Azure OpenAI adapter
//!
//! Chat-completion client for an Azure OpenAI deployment, plus the
//! stand-in used when no deployment is configured.

pub mod client;

pub use client::{completion_client_from_settings, AzureOpenAiClient, UnconfiguredClient};
