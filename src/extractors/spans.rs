use crate::error::{Error, Result};
use crate::extractors::{element_text, has_descendant_tag};
use crate::results::Transcript;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

/// Substituted for the title when the page has no title heading
pub const NO_TITLE_PLACEHOLDER: &str = "No Title Found";

/// Style fragments marking a transcript line
pub const TRANSCRIPT_STYLE_MARKERS: [&str; 2] = ["font-size:small", "font-family:Calibri"];

/// Returns true if a raw `style` attribute marks a transcript line.
///
/// Plain substring test against [`TRANSCRIPT_STYLE_MARKERS`], case sensitive,
/// no CSS parsing: `font-size: small` with a space does not match.
pub fn is_transcript_style(style: &str) -> bool {
    TRANSCRIPT_STYLE_MARKERS
        .iter()
        .any(|marker| style.contains(*marker))
}

/// Selection rules for the span extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRules {
    /// CSS selector of the title heading; the first match wins
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Tag name of the styled text nodes
    #[serde(default = "default_item_tag")]
    pub item_tag: String,

    /// A node matches if its style attribute contains any of these
    #[serde(default = "default_style_markers")]
    pub style_markers: Vec<String>,

    /// Title used when no heading matches
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_title_selector() -> String {
    "h2.title".to_string()
}

fn default_item_tag() -> String {
    "span".to_string()
}

fn default_style_markers() -> Vec<String> {
    TRANSCRIPT_STYLE_MARKERS
        .iter()
        .map(|marker| marker.to_string())
        .collect()
}

fn default_placeholder() -> String {
    NO_TITLE_PLACEHOLDER.to_string()
}

impl Default for SpanRules {
    fn default() -> Self {
        Self {
            title_selector: default_title_selector(),
            item_tag: default_item_tag(),
            style_markers: default_style_markers(),
            placeholder: default_placeholder(),
        }
    }
}

impl SpanRules {
    /// Returns true if `style` contains any of the configured markers
    pub fn matches_style(&self, style: &str) -> bool {
        self.style_markers
            .iter()
            .any(|marker| style.contains(marker.as_str()))
    }
}

/// Compiled form of [`SpanRules`]
#[derive(Debug)]
pub struct SpanMatcher {
    rules: SpanRules,
    title_selector: Selector,
    item_selector: Selector,
}

impl Default for SpanMatcher {
    fn default() -> Self {
        Self::new(SpanRules::default()).expect("Default span rules should be valid")
    }
}

impl SpanMatcher {
    /// Compile the selectors of `rules`
    pub fn new(mut rules: SpanRules) -> Result<Self> {
        rules.item_tag = rules.item_tag.trim().to_ascii_lowercase();
        if rules.item_tag.is_empty()
            || !rules
                .item_tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(Error::Config(format!(
                "invalid item tag '{}'",
                rules.item_tag
            )));
        }

        let title_selector = Selector::parse(&rules.title_selector).map_err(|e| {
            Error::Config(format!(
                "invalid title selector '{}': {}",
                rules.title_selector, e
            ))
        })?;
        let item_selector = Selector::parse(&rules.item_tag).map_err(|e| {
            Error::Config(format!("invalid item tag '{}': {}", rules.item_tag, e))
        })?;

        Ok(Self {
            rules,
            title_selector,
            item_selector,
        })
    }

    /// The rules this matcher was built from
    pub fn rules(&self) -> &SpanRules {
        &self.rules
    }

    /// Stripped text of the first title heading, or the placeholder
    pub fn title(&self, doc: &Html) -> String {
        doc.select(&self.title_selector)
            .next()
            .map(element_text)
            .unwrap_or_else(|| self.rules.placeholder.clone())
    }

    /// True for a styled node that should contribute a line.
    ///
    /// The node needs a matching style attribute and must not wrap another
    /// node of the same tag. A wrapper is skipped even when the nested node
    /// does not match itself.
    pub fn is_innermost_match(&self, element: ElementRef<'_>) -> bool {
        let styled = element
            .value()
            .attr("style")
            .is_some_and(|style| self.rules.matches_style(style));
        styled && !has_descendant_tag(element, &self.rules.item_tag)
    }

    /// Text of every innermost matching node, in document order
    pub fn spans(&self, doc: &Html) -> Vec<String> {
        let lines = doc
            .select(&self.item_selector)
            .filter(|element| self.is_innermost_match(*element))
            .map(element_text)
            .collect::<Vec<String>>();

        ::log::debug!("Span extractor matched {} lines", lines.len());
        lines
    }

    /// Parse `html` and build the transcript of `url`
    pub fn transcript(&self, url: &str, html: &str) -> Transcript {
        let doc = Html::parse_document(html);
        Transcript::new(url.to_string(), self.title(&doc), self.spans(&doc))
    }
}

/// Title of `doc` under the default rules
pub fn extract_title(doc: &Html) -> String {
    SpanMatcher::default().title(doc)
}

/// Innermost transcript spans of `doc` under the default rules
pub fn extract_spans(doc: &Html) -> Vec<String> {
    SpanMatcher::default().spans(doc)
}

/// Title followed by the transcript lines of `html`, under the default rules
pub fn extract_transcript(url: &str, html: &str) -> Transcript {
    SpanMatcher::default().transcript(url, html)
}
