use crate::error::{Error, Result};
use crate::extractors::spans::SpanRules;
use crate::sink::DEFAULT_URLS_CSV;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Index page listing every episode transcript
pub const DEFAULT_INDEX_URL: &str = "https://bigbangtrans.wordpress.com/";

/// Transcript page used when no URL is given to the span extractor
pub const DEFAULT_TRANSCRIPT_URL: &str =
    "https://bigbangtrans.wordpress.com/series-1-episode-1-pilot-episode/";

/// Configuration for the link collector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkJobConfig {
    /// Index page to collect links from
    #[serde(default = "default_index_url")]
    pub url: String,

    /// Where the CSV file is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// Configuration for the span extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanJobConfig {
    /// Transcript page to scrape
    #[serde(default = "default_transcript_url")]
    pub url: String,

    /// Print the transcript as JSON instead of plain lines
    #[serde(default)]
    pub json: bool,

    /// Selection rules
    #[serde(default)]
    pub rules: SpanRules,
}

/// One job, as described by a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JobConfig {
    /// Collect list item links into a CSV file
    Links(LinkJobConfig),

    /// Scrape a transcript page
    Spans(SpanJobConfig),
}

impl JobConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config)
    }
}

fn default_index_url() -> String {
    DEFAULT_INDEX_URL.to_string()
}

fn default_transcript_url() -> String {
    DEFAULT_TRANSCRIPT_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_URLS_CSV)
}

impl Default for LinkJobConfig {
    fn default() -> Self {
        Self {
            url: default_index_url(),
            output: default_output(),
        }
    }
}

impl Default for SpanJobConfig {
    fn default() -> Self {
        Self {
            url: default_transcript_url(),
            json: false,
            rules: SpanRules::default(),
        }
    }
}
