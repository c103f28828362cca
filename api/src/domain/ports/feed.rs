//! Feed client port trait
//!
//! Defines the interface for downloading a syndication document.

use async_trait::async_trait;

use crate::error::FeedError;

/// Issues a single GET for a feed document
#[async_trait]
pub trait FeedClient: Send + Sync {
    /// Fetch the raw feed text. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> Result<String, FeedError>;
}
