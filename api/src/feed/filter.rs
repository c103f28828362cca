//! Minimum-length message filter

use crate::domain::entities::FeedEntry;

/// Count tokens separated by runs of space, tab, newline or carriage return
pub fn word_count(text: &str) -> usize {
    text.split([' ', '\t', '\n', '\r'])
        .filter(|token| !token.is_empty())
        .count()
}

/// Keep the bodies of entries with at least `min_words` words.
///
/// Bodies are returned verbatim and in input order.
pub fn filter_messages(entries: Vec<FeedEntry>, min_words: usize) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| {
            if entry.body.is_empty() {
                tracing::debug!(title = ?entry.title, "Skipped empty message content");
                return None;
            }

            let words = word_count(&entry.body);
            if words >= min_words {
                tracing::debug!(title = ?entry.title, words, "Added message");
                Some(entry.body)
            } else {
                tracing::debug!(title = ?entry.title, words, min_words, "Skipped short message");
                None
            }
        })
        .collect()
}
