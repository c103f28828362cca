//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod azure_openai;
pub mod http_feed;

pub use azure_openai::completion_client_from_settings;
#[allow(unused_imports)]
pub use azure_openai::{AzureOpenAiClient, UnconfiguredClient};
pub use http_feed::HttpFeedClient;
