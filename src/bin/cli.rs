//! load-tt command line interface.
//!
//! A command line utility to make our lives a bit easier: loads one day's
//! entry into the legacy time tracker and keeps a screenshot as the receipt.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use load_tt::{AppConfig, BrowserSession, LaunchOptions, TrackingOptions, date, tracker};
use std::path::{Path, PathBuf};

/// Where the visual receipt of the run lands
const SCREENSHOT_PATH: &str = "page.png";

#[derive(Debug, Parser)]
#[command(name = "load-tt", version, about = "Load a day's entry into the legacy time tracker")]
struct Cli {
    /// Free-text description for the tracked entry
    #[arg(required_unless_present = "dates")]
    message: Option<String>,

    /// Date for the entry (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Set the date to yesterday (too lazy)
    #[arg(long)]
    yesterday: bool,

    /// Don't commit the hours, just screenshot
    #[arg(long)]
    dry: bool,

    /// Milliseconds to allow the page to settle after each field, default: 200
    #[arg(long)]
    latency: Option<u64>,

    /// List the dates already loaded and exit without tracking
    #[arg(long)]
    dates: bool,

    /// Configuration file to use instead of ~/.timetracker/config.yml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }?;

    let options = TrackingOptions::merge(
        &config.options,
        date::resolve(cli.date, cli.yesterday),
        cli.message.clone().unwrap_or_default(),
        cli.dry,
        cli.latency,
    );
    log::debug!("Resolved options: {:?}", options);

    let session = BrowserSession::launch(LaunchOptions::default()).context("Could not launch the browser")?;

    // Whatever happens past this point, the browser is closed before the
    // error surfaces; a close failure is reported but never masks it.
    let outcome = drive(&session, &config, &options, cli.dates);
    if let Err(e) = session.close() {
        log::warn!("Failed to close the browser: {}", e);
    }

    outcome
}

fn drive(session: &BrowserSession, config: &AppConfig, options: &TrackingOptions, list_dates: bool) -> Result<()> {
    tracker::open_entry_page(session, &config.page, &config.credentials)
        .context("Could not reach the timesheet entry page")?;

    if list_dates {
        let loaded = tracker::fetch_loaded_dates(session, &config.page.entry)?;
        for day in loaded {
            println!("{}", date::format_entry_date(day));
        }
        return Ok(());
    }

    tracker::track(session, &config.page.entry, options).context("Loading the entry failed")?;

    session.screenshot_to(Path::new(SCREENSHOT_PATH))?;
    log::info!("Wrote {}", SCREENSHOT_PATH);

    Ok(())
}
