//! Feed entry domain entity
//!
//! A transient view of one syndication item. Entries only live between
//! parsing and filtering; the cache keeps the filtered bodies as plain strings.

/// One parsed feed item with its chosen text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    /// Summary text, or content text when the summary is empty
    pub body: String,
}

impl FeedEntry {
    pub fn new(title: Option<String>, body: impl Into<String>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }
}
