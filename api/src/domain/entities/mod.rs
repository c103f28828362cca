//! Domain entities
//!
//! Pure domain models for feed entries and sentiment transformations.

pub mod feed_entry;
pub mod transformation;

pub use feed_entry::FeedEntry;
pub use transformation::{MessageComparison, Transformation, TransformationOutcome};
