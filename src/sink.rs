use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default file name for the collected links, relative to the working directory
pub const DEFAULT_URLS_CSV: &str = "collected_urls.csv";

/// Writes `urls` as a single column CSV file, one URL per row, no header.
///
/// The file is created or truncated, so an empty slice leaves an empty file.
pub fn write_urls_csv(path: impl AsRef<Path>, urls: &[String]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for url in urls {
        writer.write_record([url])?;
    }
    writer.flush()?;

    ::log::info!("Wrote {} URLs to {}", urls.len(), path.display());
    Ok(())
}

/// Reads back a file written by [`write_urls_csv`]
pub fn read_urls_csv(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(url) = record.get(0) {
            urls.push(url.to_string());
        }
    }
    Ok(urls)
}

/// Prints an optional header line followed by one line per entry
pub fn print_lines<W: Write>(out: &mut W, header: Option<&str>, lines: &[String]) -> Result<()> {
    if let Some(header) = header {
        writeln!(out, "{}", header)?;
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
