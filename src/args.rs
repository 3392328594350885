use clap::{Parser, Subcommand};
use std::path::PathBuf;
use transcript_harvest::config::{
    DEFAULT_INDEX_URL, DEFAULT_TRANSCRIPT_URL, JobConfig, LinkJobConfig, SpanJobConfig,
};
use transcript_harvest::sink::DEFAULT_URLS_CSV;

#[derive(Parser, Debug)]
#[command(name = "transcript-harvest")]
#[command(about = "Collects episode links and scrapes transcript lines from a transcript site")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Collect the first link of every list item and save them as CSV
    CollectUrls {
        /// Index page to read
        #[arg(long, default_value = DEFAULT_INDEX_URL)]
        url: String,

        /// CSV file to write
        #[arg(short, long, default_value = DEFAULT_URLS_CSV)]
        output: PathBuf,
    },

    /// Print the title and styled lines of a transcript page
    ScrapeSpans {
        /// Transcript page to read
        #[arg(long, default_value = DEFAULT_TRANSCRIPT_URL)]
        url: String,

        /// Print the transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a job described by a JSON config file
    Run {
        /// Path to the config file
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Convert the command line into a job config
pub fn to_job_config(command: Command) -> transcript_harvest::Result<JobConfig> {
    match command {
        Command::CollectUrls { url, output } => Ok(JobConfig::Links(LinkJobConfig { url, output })),
        Command::ScrapeSpans { url, json } => Ok(JobConfig::Spans(SpanJobConfig {
            url,
            json,
            ..SpanJobConfig::default()
        })),
        Command::Run { config } => JobConfig::from_file(config),
    }
}
