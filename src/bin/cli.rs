// src/bin/cli.rs
use std::{io, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use nps_scrape::{
    cli,
    config::{consts, options::AppOptions},
    scrape::Scraper,
};

/// Browse national sites by state and look up places near them.
#[derive(Debug, Parser)]
#[command(name = "nps", version, about)]
struct Args {
    /// Cache file (created on first miss)
    #[arg(long, value_name = "PATH")]
    cache: Option<PathBuf>,

    /// MapQuest API key for nearby-place searches
    #[arg(long, env = consts::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds, 0 for none
    #[arg(long, value_name = "SECS", default_value_t = consts::REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Directory site root
    #[arg(long, value_name = "URL", default_value = consts::BASE_URL)]
    base_url: String,

    /// Debug-level entries in the log file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_path = PathBuf::from(consts::STORE_DIR).join(consts::LOG_FILE);
    if let Err(e) = nps_scrape::log::init(&log_path, args.verbose) {
        eprintln!("Warning: logging disabled ({}): {e}", log_path.display());
    }

    let mut options = AppOptions::default();
    options.fetch.base_url = args.base_url;
    options.fetch.set_timeout_secs(args.timeout);
    options.nearby.api_key = args.api_key.filter(|k| !k.trim().is_empty());
    if let Some(path) = args.cache {
        options.cache.path = path;
    }

    let mut scraper = Scraper::from_options(options).wrap_err("could not set up the scraper")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run_session(&mut scraper, stdin.lock(), &mut stdout)
        .wrap_err("session aborted")?;
    Ok(())
}
