//! Feed processing
//!
//! Turns a raw syndication document into the message strings the
//! service selects from.

pub mod filter;
pub mod parser;

pub use filter::filter_messages;
pub use parser::parse_feed;
