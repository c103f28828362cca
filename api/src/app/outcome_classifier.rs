//! Outcome classification from transformer output text
//!
//! Clients that only see the returned text (the plain message endpoint,
//! older front-ends) can recover the outcome from the bracketed note the
//! transformer appends. The markers below are the single source for both
//! the notes and their detection.

use crate::domain::entities::TransformationOutcome;

/// Marker present in every "provider not configured" note
pub const NOT_CONFIGURED_MARKER: &str =
    "not transformed by Azure OpenAI because the service is not configured";

/// Marker present in every "provider call failed" note
pub const FAILURE_MARKER: &str = "Message transformation failed";

/// Marker present in failure notes caused by the provider's content filter
pub const CONTENT_FILTER_MARKER: &str = "content_filter";

/// Classify transformer output, returning the outcome and its note.
///
/// Checked in priority order: not configured, content filtered,
/// other failure, success.
pub fn classify(transformed: &str) -> (TransformationOutcome, &'static str) {
    let outcome = if transformed.contains(NOT_CONFIGURED_MARKER) {
        TransformationOutcome::NotConfigured
    } else if transformed.contains(FAILURE_MARKER) {
        if transformed.contains(CONTENT_FILTER_MARKER) {
            TransformationOutcome::ContentFiltered
        } else {
            TransformationOutcome::ServiceError
        }
    } else {
        TransformationOutcome::Success
    };

    (outcome, outcome.note())
}
