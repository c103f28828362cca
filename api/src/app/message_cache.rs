//! Message cache
//!
//! Runs the fetch → parse → filter pipeline at most once per process and
//! hands every later caller the same list.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::ports::FeedClient;
use crate::error::FeedError;
use crate::feed::{filter_messages, parse_feed};

/// Write-once cache of filtered feed messages
pub struct MessageCache<FC>
where
    FC: FeedClient,
{
    feed: Arc<FC>,
    feed_url: String,
    min_words: usize,
    messages: OnceCell<Arc<Vec<String>>>,
}

impl<FC> MessageCache<FC>
where
    FC: FeedClient,
{
    pub fn new(feed: Arc<FC>, feed_url: String, min_words: usize) -> Self {
        Self {
            feed,
            feed_url,
            min_words,
            messages: OnceCell::new(),
        }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    /// Return the cached messages, populating them on first use.
    ///
    /// Concurrent first callers wait on a single populate. A successful
    /// fetch is stored even when it yields no messages. A failed fetch or
    /// parse is logged, returns an empty list and leaves the cache unset,
    /// so the next caller tries again.
    pub async fn get_or_fetch(&self) -> Arc<Vec<String>> {
        let result = self
            .messages
            .get_or_try_init(|| async { self.load().await.map(Arc::new) })
            .await;

        match result {
            Ok(messages) => Arc::clone(messages),
            Err(e) => {
                tracing::warn!(
                    url = %self.feed_url,
                    error = %e,
                    "Error fetching or parsing feed; returning no messages"
                );
                Arc::new(Vec::new())
            }
        }
    }

    async fn load(&self) -> Result<Vec<String>, FeedError> {
        tracing::info!(url = %self.feed_url, "Fetching and filtering messages from feed");

        let raw = self.feed.fetch(&self.feed_url).await?;
        let entries = parse_feed(&raw)?;
        let total = entries.len();
        let messages = filter_messages(entries, self.min_words);

        tracing::info!(
            entries = total,
            messages = messages.len(),
            min_words = self.min_words,
            "Finished processing feed"
        );
        Ok(messages)
    }
}
