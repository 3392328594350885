pub mod links;
pub mod spans;


use scraper::{ElementRef, Selector};

/// Text of an element and all its descendants, with leading and trailing
/// whitespace stripped. Inner whitespace is left untouched.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Returns true if any element below `element`, at any depth, has the tag
/// name `tag`. The element itself is not considered.
pub fn has_descendant_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .any(|child| child.value().name() == tag || has_descendant_tag(child, tag))
}

/// Parse a selector that is fixed at compile time
pub(crate) fn static_selector(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("Static selectors should be valid")
}
