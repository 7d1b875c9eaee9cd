//! # NYT News Robot
//!
//! A browser-automation robot that searches the New York Times for a phrase,
//! filters the results by section and date range, scrapes the resulting
//! article metadata, downloads thumbnail images, and writes everything to a
//! spreadsheet.
//!
//! ## Usage
//!
//! A chromedriver (or any WebDriver endpoint) must be running:
//!
//! ```sh
//! chromedriver --port=9515 &
//! nyt_news_robot --headless --search-phrase "Artificial Intelligence" --months 3
//! ```
//!
//! ## Architecture
//!
//! One strictly sequential pipeline:
//! 1. **Input**: resolve search parameters from a work item or the fallback
//! 2. **Browse**: search, filter, sort, and paginate through the live site
//! 3. **Scrape**: one pass over the final DOM, dedup by title, analyze text
//! 4. **Output**: thumbnail downloads plus a single `news.xlsx` flush
//!
//! Any workflow failure is caught here at the top level, logged, and
//! followed by browser cleanup; the process then exits non-zero.

use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analyze;
mod browser;
mod cli;
mod dates;
mod models;
mod outputs;
mod robot;
mod scrape;
mod utils;
mod workitem;

use browser::Browser;
use cli::Cli;
use robot::NewsRobot;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news robot starting up");

    let args = Cli::parse();

    let params = match workitem::load_params(&args) {
        Ok(params) => params,
        Err(e) => {
            error!(error = %e, "Failed to resolve run parameters");
            return ExitCode::FAILURE;
        }
    };

    // Early check: a bad output path should fail before any browser work.
    let output_dir = PathBuf::from(&args.output_dir);
    let images_dir = output_dir.join("images");
    for dir in [&output_dir, &images_dir] {
        if let Err(e) = utils::ensure_writable_dir(&dir.to_string_lossy()).await {
            error!(path = %dir.display(), error = %e, "Output directory is not writable");
            return ExitCode::FAILURE;
        }
    }

    let browser = match Browser::connect(&args.webdriver_url, args.headless).await {
        Ok(browser) => browser,
        Err(e) => {
            error!(webdriver_url = %args.webdriver_url, error = %e, "Failed to start the browser session");
            return ExitCode::FAILURE;
        }
    };

    let robot = NewsRobot::new(browser, params, images_dir);
    let sheet_path = output_dir.join("news.xlsx");
    let outcome = run_pipeline(&robot, &sheet_path).await;

    // Release the browser regardless of how the run went.
    if let Err(e) = robot.close().await {
        warn!(error = %e, "Failed to close the browser cleanly");
    }

    let elapsed = start_time.elapsed();
    match outcome {
        Ok(count) => {
            info!(
                ?elapsed,
                articles = count,
                sheet = %sheet_path.display(),
                "Run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

/// The fallible part of the run: browse, scrape, and flush the spreadsheet.
async fn run_pipeline(robot: &NewsRobot, sheet_path: &Path) -> Result<usize, Box<dyn Error>> {
    let records = robot.run().await?;
    outputs::sheet::write_news_sheet(&records, sheet_path)?;
    Ok(records.len())
}
