pub mod collectors;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod results;
pub mod sink;

// Re-export commonly used types for convenience
pub use collectors::{LinkCollector, SpanExtractor};
pub use error::{Error, Result};
pub use results::{LinkRecord, Transcript};

use config::{JobConfig, LinkJobConfig, SpanJobConfig};
use std::io::Write;

/// Collect links from the configured page, print them and save them as CSV.
///
/// A failed fetch still truncates the output file.
pub async fn run_link_job<W: Write>(config: &LinkJobConfig, out: &mut W) -> Result<Vec<LinkRecord>> {
    let urls = LinkCollector::new(config.url.as_str()).collect(out).await?;

    sink::print_lines(out, Some("All retrieved URLs:"), &urls)?;
    sink::write_urls_csv(&config.output, &urls)?;
    writeln!(
        out,
        "\nSaved {} URLs to {}.",
        urls.len(),
        config.output.display()
    )?;

    Ok(urls)
}

/// Scrape the configured transcript page and print it
pub async fn run_span_job<W: Write>(config: &SpanJobConfig, out: &mut W) -> Result<Vec<String>> {
    let extractor = SpanExtractor::new(config.url.as_str()).with_rules(config.rules.clone())?;

    if config.json {
        let Some(transcript) = extractor.transcript(out).await? else {
            return Ok(Vec::new());
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&transcript)?)?;
        return Ok(transcript.into_lines());
    }

    let lines = extractor.scrape(out).await?;
    sink::print_lines(out, None, &lines)?;
    Ok(lines)
}

/// Run whichever job the config describes
pub async fn run_job<W: Write>(config: &JobConfig, out: &mut W) -> Result<()> {
    match config {
        JobConfig::Links(links) => {
            run_link_job(links, out).await?;
        }
        JobConfig::Spans(spans) => {
            run_span_job(spans, out).await?;
        }
    }
    Ok(())
}
