use clap::Parser;
use log::LevelFilter;

mod args;
use args::{Args, to_job_config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging, RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config = match to_job_config(args.command) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load job: {}", e);
            std::process::exit(1);
        }
    };
    ::log::debug!("Running job {:?}", config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = transcript_harvest::run_job(&config, &mut stdout).await {
        ::log::error!("Job failed: {}", e);
        std::process::exit(1);
    }
}
