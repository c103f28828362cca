//! Message service
//!
//! Orchestrates cache → random pick → optional transformation for the
//! message endpoints.

use std::sync::Arc;

use crate::app::message_cache::MessageCache;
use crate::app::selector::pick_random;
use crate::app::sentiment_transformer::SentimentTransformer;
use crate::domain::entities::{MessageComparison, Transformation};
use crate::domain::ports::FeedClient;
use crate::error::AppError;

/// Service for serving random feed messages
pub struct MessageService<FC>
where
    FC: FeedClient,
{
    cache: Arc<MessageCache<FC>>,
    transformer: Arc<SentimentTransformer>,
}

impl<FC> MessageService<FC>
where
    FC: FeedClient,
{
    pub fn new(cache: Arc<MessageCache<FC>>, transformer: Arc<SentimentTransformer>) -> Self {
        Self { cache, transformer }
    }

    /// A random message exactly as it appeared in the feed
    pub async fn random_original_message(&self) -> Result<String, AppError> {
        let message = self.pick().await?;
        tracing::info!("Selected random original message");
        Ok(message)
    }

    /// A random message rewritten with a positive sentiment
    pub async fn random_transformed_message(&self) -> Result<Transformation, AppError> {
        let message = self.pick().await?;
        tracing::info!("Selected random message for positivity transformation");
        Ok(self.transformer.transform(&message).await)
    }

    /// A random message alongside its rewritten version
    pub async fn compare(&self) -> Result<MessageComparison, AppError> {
        let message = self.pick().await?;
        let transformation = self.transformer.transform(&message).await;
        tracing::info!(status = %transformation.outcome, "Built message comparison");
        Ok(MessageComparison::new(message, transformation))
    }

    async fn pick(&self) -> Result<String, AppError> {
        let messages = self.cache.get_or_fetch().await;

        if messages.is_empty() {
            tracing::warn!("No filtered messages found");
            return Err(AppError::NoMessages(no_messages_reason(
                self.cache.min_words(),
            )));
        }

        Ok(pick_random(&messages)?.to_string())
    }
}

/// 404 reason quoting the threshold actually enforced
pub fn no_messages_reason(min_words: usize) -> String {
    let unit = if min_words == 1 { "word" } else { "words" };
    format!("No messages found with at least {} {}.", min_words, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::UnconfiguredClient;
    use crate::domain::entities::TransformationOutcome;
    use crate::test_utils::{
        rss_feed, CountingFeedClient, ScriptedCompletionClient, ScriptedReply,
    };

    fn create_service(
        feed: &str,
        transformer: SentimentTransformer,
    ) -> MessageService<CountingFeedClient> {
        let client = Arc::new(CountingFeedClient::new(feed.to_string()));
        let cache = Arc::new(MessageCache::new(
            client,
            "https://feed.test/rss".to_string(),
            1,
        ));
        MessageService::new(cache, Arc::new(transformer))
    }

    fn unconfigured() -> SentimentTransformer {
        SentimentTransformer::new(Arc::new(UnconfiguredClient), "p".to_string())
    }

    #[test]
    fn reason_matches_threshold() {
        assert_eq!(
            no_messages_reason(1),
            "No messages found with at least 1 word."
        );
        assert_eq!(
            no_messages_reason(10),
            "No messages found with at least 10 words."
        );
    }

    #[tokio::test]
    async fn original_message_comes_from_feed() {
        let service = create_service(&rss_feed(&["Hello world"]), unconfigured());

        let message = service.random_original_message().await.unwrap();

        assert_eq!(message, "Hello world");
    }

    #[tokio::test]
    async fn empty_feed_is_no_messages() {
        let service = create_service(&rss_feed(&[]), unconfigured());

        let err = service.random_original_message().await.unwrap_err();

        match err {
            AppError::NoMessages(reason) => {
                assert_eq!(reason, "No messages found with at least 1 word.")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(service.compare().await.is_err());
        assert!(service.random_transformed_message().await.is_err());
    }

    #[tokio::test]
    async fn transformed_message_uses_provider_output() {
        let transformer = SentimentTransformer::new(
            Arc::new(ScriptedCompletionClient::new(ScriptedReply::Text(
                "Hello, beautiful world!".to_string(),
            ))),
            "p".to_string(),
        );
        let service = create_service(&rss_feed(&["Hello world"]), transformer);

        let result = service.random_transformed_message().await.unwrap();

        assert_eq!(result.text, "Hello, beautiful world!");
        assert_eq!(result.outcome, TransformationOutcome::Success);
    }

    #[tokio::test]
    async fn compare_reports_not_configured() {
        let service = create_service(&rss_feed(&["Hello world"]), unconfigured());

        let comparison = service.compare().await.unwrap();

        assert_eq!(comparison.original_message, "Hello world");
        assert!(comparison.enhanced_message.contains("Hello world"));
        assert!(!comparison.was_transformed);
        assert_eq!(comparison.status, TransformationOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn compare_reports_content_filter() {
        let transformer = SentimentTransformer::new(
            Arc::new(ScriptedCompletionClient::new(ScriptedReply::ContentFiltered(
                "blocked".to_string(),
            ))),
            "p".to_string(),
        );
        let service = create_service(&rss_feed(&["Hello world"]), transformer);

        let comparison = service.compare().await.unwrap();

        assert_eq!(comparison.status, TransformationOutcome::ContentFiltered);
        assert!(!comparison.was_transformed);
        assert_eq!(
            comparison.transformation_note,
            TransformationOutcome::ContentFiltered.note()
        );
    }
}
