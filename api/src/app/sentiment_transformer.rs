//! Sentiment transformer
//!
//! Asks the completion provider to rewrite a message with a positive
//! sentiment. Never fails outward: every error path returns the original
//! message with a bracketed note, together with a structured outcome.

use std::sync::Arc;

use crate::app::outcome_classifier::{classify, FAILURE_MARKER, NOT_CONFIGURED_MARKER};
use crate::domain::entities::{Transformation, TransformationOutcome};
use crate::domain::ports::CompletionClient;
use crate::error::CompletionError;

pub const USER_PROMPT_PREFIX: &str = "Transform this message to have a positive, happy sentiment: ";

pub struct SentimentTransformer {
    client: Arc<dyn CompletionClient>,
    system_prompt: String,
}

impl SentimentTransformer {
    pub fn new(client: Arc<dyn CompletionClient>, system_prompt: String) -> Self {
        Self {
            client,
            system_prompt,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Rewrite `message`, falling back to an annotated original on failure
    pub async fn transform(&self, message: &str) -> Transformation {
        let transformation = self.run(message).await;

        // Text-only clients classify by markers; a post quoting a marker breaks that
        let (text_outcome, _) = classify(&transformation.text);
        if text_outcome != transformation.outcome {
            tracing::warn!(
                outcome = %transformation.outcome,
                text_outcome = %text_outcome,
                "Transformed text classifies differently from its outcome"
            );
        }
        transformation
    }

    async fn run(&self, message: &str) -> Transformation {
        let user_prompt = format!("{USER_PROMPT_PREFIX}{message}");

        match self.client.complete(&self.system_prompt, &user_prompt).await {
            Ok(Some(text)) if !text.is_empty() => {
                tracing::info!("Successfully transformed message");
                Transformation {
                    text,
                    outcome: TransformationOutcome::Success,
                }
            }
            Ok(_) => {
                tracing::warn!(
                    "Completion provider returned no content; returning original message"
                );
                Transformation {
                    text: message.to_string(),
                    outcome: TransformationOutcome::Success,
                }
            }
            Err(CompletionError::NotConfigured) => {
                tracing::warn!("Completion provider is not configured; message not transformed");
                Transformation {
                    text: format!("{message}\n\n[Note: This message was {NOT_CONFIGURED_MARKER}.]"),
                    outcome: TransformationOutcome::NotConfigured,
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Completion provider call failed; returning original message"
                );
                let outcome = if e.is_content_filtered() {
                    TransformationOutcome::ContentFiltered
                } else {
                    TransformationOutcome::ServiceError
                };
                Transformation {
                    text: format!("{message}\n\n[Note: {FAILURE_MARKER} - {e}]"),
                    outcome,
                }
            }
        }
    }
}
