//! HTTP feed adapter
//!
//! Downloads syndication documents with reqwest.

pub mod client;

pub use client::HttpFeedClient;
