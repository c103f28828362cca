//! Test fixtures
//!
//! Factory functions for building feed documents with sensible defaults.

/// Build an RSS 2.0 document with one `<item>` per description
pub fn rss_feed(descriptions: &[&str]) -> String {
    let items: String = descriptions
        .iter()
        .enumerate()
        .map(|(i, d)| {
            format!(
                "  <item><title>Post {}</title><description>{}</description></item>\n",
                i + 1,
                escape_xml(d)
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\"?>\n<rss version=\"2.0\">\n<channel>\n  <title>Test feed</title>\n{}</channel>\n</rss>\n",
        items
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
