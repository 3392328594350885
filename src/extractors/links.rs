use crate::extractors::static_selector;
use scraper::Html;

/// Collects the first anchor target of every list item in the page.
///
/// Each `li` contributes at most one URL: the `href` of its first
/// descendant `a`, and only when that attribute is present and non-empty.
/// A later anchor in the same item is never used as a fallback. Targets are
/// returned as written in the markup, in document order, duplicates kept.
pub fn extract_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    links_from_document(&doc)
}

/// Same as [`extract_links`] for an already parsed document
pub fn links_from_document(doc: &Html) -> Vec<String> {
    let item_selector = static_selector("li");
    let anchor_selector = static_selector("a");

    let links = doc
        .select(&item_selector)
        .filter_map(|item| item.select(&anchor_selector).next())
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|href| href.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("Link collector found {} links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}
