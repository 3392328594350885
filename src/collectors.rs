use crate::error::Result;
use crate::extractors::links::extract_links;
use crate::extractors::spans::{SpanMatcher, SpanRules};
use crate::fetch::{FetchOutcome, Fetcher};
use crate::results::{LinkRecord, Transcript};
use std::io::Write;

/// Fetches an index page and collects the first link of every list item
pub struct LinkCollector {
    url: String,
    fetcher: Fetcher,
}

impl LinkCollector {
    /// Create a collector for the given index page
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fetcher: Fetcher::new(),
        }
    }

    /// Use a specific fetcher
    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Fetch the page and return its links in document order.
    ///
    /// A non-200 response writes a diagnostic to `out` and yields an empty list.
    pub async fn collect<W: Write>(&self, out: &mut W) -> Result<Vec<LinkRecord>> {
        let html = match self.fetcher.fetch(&self.url).await? {
            FetchOutcome::Page(html) => html,
            FetchOutcome::Failed(status) => {
                writeln!(
                    out,
                    "Failed to retrieve the webpage. Status code: {}",
                    status.as_u16()
                )?;
                return Ok(Vec::new());
            }
        };

        let links = extract_links(&html);
        ::log::info!("Collected {} links from {}", links.len(), self.url);
        Ok(links)
    }
}

/// Fetches a transcript page and extracts its title and styled lines
pub struct SpanExtractor {
    url: String,
    fetcher: Fetcher,
    matcher: SpanMatcher,
}

impl SpanExtractor {
    /// Create an extractor with the default rules
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fetcher: Fetcher::new(),
            matcher: SpanMatcher::default(),
        }
    }

    /// Use a specific fetcher
    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the selection rules
    pub fn with_rules(mut self, rules: SpanRules) -> Result<Self> {
        self.matcher = SpanMatcher::new(rules)?;
        Ok(self)
    }

    /// Fetch the page and build its transcript.
    ///
    /// Returns `None` after writing a diagnostic to `out` when the status is not 200.
    pub async fn transcript<W: Write>(&self, out: &mut W) -> Result<Option<Transcript>> {
        let html = match self.fetcher.fetch(&self.url).await? {
            FetchOutcome::Page(html) => html,
            FetchOutcome::Failed(status) => {
                writeln!(
                    out,
                    "Failed to retrieve {}. Status code: {}",
                    self.url,
                    status.as_u16()
                )?;
                return Ok(None);
            }
        };

        let transcript = self.matcher.transcript(&self.url, &html);
        ::log::info!(
            "Found {} transcript lines under '{}'",
            transcript.lines.len(),
            transcript.title
        );
        Ok(Some(transcript))
    }

    /// Title followed by every line, or an empty list when the fetch failed
    pub async fn scrape<W: Write>(&self, out: &mut W) -> Result<Vec<String>> {
        Ok(self
            .transcript(out)
            .await?
            .map(Transcript::into_lines)
            .unwrap_or_default())
    }
}
