//! Unified error types for the happy-feed API
//!
//! This module defines error types for each layer:
//! - `FeedError`: syndication feed fetch and parse errors
//! - `CompletionError`: text-completion provider errors
//! - `DomainError`: core selection errors
//! - `AppError`: errors surfaced at the HTTP boundary

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Feed acquisition errors
///
/// Both variants are recovered locally by the message cache: they are
/// logged and the request sees zero messages.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Completion provider errors
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion provider is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The provider refused the prompt or the generated text.
    /// The display text always contains `content_filter`.
    #[error("Response blocked by content_filter: {0}")]
    ContentFiltered(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CompletionError {
    pub fn is_content_filtered(&self) -> bool {
        matches!(self, CompletionError::ContentFiltered(_))
    }
}

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot select from an empty collection")]
    EmptyCollection,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// No cached messages to choose from. Rendered as a plain-text 404.
    #[error("{0}")]
    NoMessages(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::NoMessages(reason) => {
                return (
                    StatusCode::NOT_FOUND,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    reason,
                )
                    .into_response();
            }
            AppError::Domain(DomainError::EmptyCollection) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(DomainError::EmptyCollection.to_string()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
