//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod diagnostics_service;
pub mod message_cache;
pub mod message_service;
pub mod outcome_classifier;
pub mod selector;
pub mod sentiment_transformer;

pub use diagnostics_service::{DiagnosticResult, DiagnosticsService};
pub use message_cache::MessageCache;
pub use message_service::MessageService;
// Re-export classifier for text-only consumers
#[allow(unused_imports)]
pub use outcome_classifier::classify;
pub use sentiment_transformer::SentimentTransformer;
