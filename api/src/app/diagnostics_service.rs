//! Diagnostics service
//!
//! Runs cheap dependency checks for operators. A failing check is reported,
//! never raised.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::sentiment_transformer::SentimentTransformer;
use crate::domain::ports::FeedClient;

/// Result of one diagnostic check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub check_name: String,
    pub is_successful: bool,
    pub details: String,
    pub checked_at: DateTime<Utc>,
}

impl DiagnosticResult {
    fn new(check_name: &str, is_successful: bool, details: impl Into<String>) -> Self {
        let details = details.into();
        if is_successful {
            tracing::info!(check = check_name, %details, "Diagnostic check passed");
        } else {
            tracing::warn!(check = check_name, %details, "Diagnostic check failed");
        }
        Self {
            check_name: check_name.to_string(),
            is_successful,
            details,
            checked_at: Utc::now(),
        }
    }
}

pub struct DiagnosticsService<FC>
where
    FC: FeedClient,
{
    feed: Arc<FC>,
    feed_url: String,
    transformer: Arc<SentimentTransformer>,
}

impl<FC> DiagnosticsService<FC>
where
    FC: FeedClient,
{
    pub fn new(feed: Arc<FC>, feed_url: String, transformer: Arc<SentimentTransformer>) -> Self {
        Self {
            feed,
            feed_url,
            transformer,
        }
    }

    pub async fn run(&self) -> Vec<DiagnosticResult> {
        tracing::info!("Running diagnostic checks");

        let feed_check = match self.feed.fetch(&self.feed_url).await {
            Ok(_) => {
                DiagnosticResult::new("RSS Feed Connectivity", true, "RSS feed is reachable.")
            }
            Err(e) => DiagnosticResult::new("RSS Feed Connectivity", false, e.to_string()),
        };

        let provider_check = if self.transformer.is_configured() {
            DiagnosticResult::new(
                "Azure OpenAI Configuration",
                true,
                "Azure OpenAI is configured.",
            )
        } else {
            DiagnosticResult::new(
                "Azure OpenAI Configuration",
                false,
                "Azure OpenAI is not configured.",
            )
        };

        vec![
            DiagnosticResult::new(
                "Message Service Availability",
                true,
                "Message service is available.",
            ),
            feed_check,
            provider_check,
        ]
    }
}
