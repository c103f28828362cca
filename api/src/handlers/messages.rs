//! Message handlers
//!
//! Random feed messages, raw or rewritten, plus a side-by-side comparison.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::entities::MessageComparison;
use crate::error::AppError;
use crate::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// GET /TrumpMessage
///
/// Returns a random message rewritten with a positive sentiment.
/// Provider problems still answer 200, with a note appended to the text.
pub async fn get_transformed_message(State(state): State<AppState>) -> Result<Response, AppError> {
    let transformation = state.message_service.random_transformed_message().await?;

    Ok((
        [
            (header::CONTENT_TYPE, TEXT_PLAIN.to_string()),
            (
                header::HeaderName::from_static("x-transformation-status"),
                transformation.outcome.to_string(),
            ),
        ],
        transformation.text,
    )
        .into_response())
}

/// GET /TrumpMessage/original
///
/// Returns a random message exactly as it appeared in the feed.
pub async fn get_original_message(State(state): State<AppState>) -> Result<Response, AppError> {
    let message = state.message_service.random_original_message().await?;

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], message).into_response())
}

/// GET /TrumpMessage/compare
///
/// Returns the original and rewritten versions of one random message.
pub async fn get_message_comparison(
    State(state): State<AppState>,
) -> Result<Json<MessageComparison>, AppError> {
    let comparison = state.message_service.compare().await?;
    Ok(Json(comparison))
}
