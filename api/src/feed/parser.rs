//! Syndication feed parser
//!
//! Accepts RSS 0.9x/1.0/2.0, Atom and JSON Feed documents via `feed-rs`
//! and picks one text body per entry.

use feed_rs::parser;

use crate::domain::entities::FeedEntry;
use crate::error::FeedError;

/// Parse a feed document into entries, in document order.
///
/// The body is the summary when it has text, otherwise the content body.
/// Entries with neither are skipped. A valid feed with no items yields an
/// empty list.
pub fn parse_feed(raw: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let feed = parser::parse(raw.as_bytes()).map_err(|e| FeedError::Parse(e.to_string()))?;

    let entries = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content);
            let body = entry
                .summary
                .map(|s| s.content)
                .filter(|s| !s.is_empty())
                .or_else(|| entry.content.and_then(|c| c.body))
                .filter(|s| !s.is_empty());

            match body {
                Some(body) => Some(FeedEntry::new(title, body)),
                None => {
                    tracing::debug!(title = ?title, "Skipping feed entry without a body");
                    None
                }
            }
        })
        .collect();

    Ok(entries)
}
