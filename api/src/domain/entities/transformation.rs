//! Transformation domain entities
//!
//! The outcome of rewriting a message's sentiment, and the comparison
//! value returned to clients that want both versions side by side.

use serde::{Deserialize, Serialize};

/// How a sentiment transformation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformationOutcome {
    Success,
    NotConfigured,
    ContentFiltered,
    ServiceError,
}

impl TransformationOutcome {
    /// Human-readable note shown next to a comparison
    pub fn note(&self) -> &'static str {
        match self {
            TransformationOutcome::Success => {
                "Message was successfully transformed to a positive sentiment."
            }
            TransformationOutcome::NotConfigured => {
                "Azure OpenAI is not configured, so the original message is shown."
            }
            TransformationOutcome::ContentFiltered => {
                "The transformation was blocked by the provider's content filter."
            }
            TransformationOutcome::ServiceError => {
                "The transformation service returned an error, so the original message is shown."
            }
        }
    }
}

impl std::fmt::Display for TransformationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformationOutcome::Success => write!(f, "success"),
            TransformationOutcome::NotConfigured => write!(f, "not_configured"),
            TransformationOutcome::ContentFiltered => write!(f, "content_filtered"),
            TransformationOutcome::ServiceError => write!(f, "service_error"),
        }
    }
}

/// Transformer output: the text to show plus how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub text: String,
    pub outcome: TransformationOutcome,
}

/// Original vs. rewritten message, serialized as the compare response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageComparison {
    pub original_message: String,
    pub enhanced_message: String,
    pub was_transformed: bool,
    pub transformation_note: String,
    pub status: TransformationOutcome,
}

impl MessageComparison {
    pub fn new(original: String, transformation: Transformation) -> Self {
        let status = transformation.outcome;
        Self {
            original_message: original,
            enhanced_message: transformation.text,
            was_transformed: status == TransformationOutcome::Success,
            transformation_note: status.note().to_string(),
            status,
        }
    }
}
