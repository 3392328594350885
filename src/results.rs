use serde::{Deserialize, Serialize};

/// A hyperlink target exactly as it appears in the page markup
pub type LinkRecord = String;

/// Title and styled lines scraped from one transcript page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// URL of the page
    pub url: String,

    /// Page title, or the placeholder when the page has none
    pub title: String,

    /// Text of the matched nodes, in document order
    pub lines: Vec<String>,
}

impl Transcript {
    /// Create a new transcript
    pub fn new(url: String, title: String, lines: Vec<String>) -> Self {
        Self { url, title, lines }
    }

    /// Flatten into the title followed by every line
    pub fn into_lines(self) -> Vec<String> {
        std::iter::once(self.title).chain(self.lines).collect()
    }
}
