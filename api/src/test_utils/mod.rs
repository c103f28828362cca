//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Call counting and scripted replies are a few lines by hand
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! HTTP-level tests use wiremock servers with the real adapters instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
