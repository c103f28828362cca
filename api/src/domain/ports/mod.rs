//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod completion;
pub mod feed;

pub use completion::CompletionClient;
pub use feed::FeedClient;
