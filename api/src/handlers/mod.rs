//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod diagnostics;
pub mod messages;

pub use diagnostics::run_diagnostics;
pub use messages::{get_message_comparison, get_original_message, get_transformed_message};
