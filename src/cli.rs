//! Command-line interface definitions for the news search robot.
//!
//! All options can be supplied as flags; the WebDriver URL and work-item
//! path can also come from the environment, which is how an orchestrator
//! hands them to the process.

use clap::Parser;

/// Command-line arguments for a single automation run.
///
/// Search parameters normally arrive via a JSON work item (see
/// [`crate::workitem`]); the `--search-phrase`/`--months`/`--section` flags
/// override whatever the work item or fallback supplies.
///
/// # Examples
///
/// ```sh
/// # Fallback parameters, local chromedriver
/// nyt_news_robot
///
/// # Explicit parameters, headless
/// nyt_news_robot --headless --search-phrase "climate change" --months 6 \
///     --section climate --section science
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory for the spreadsheet and the downloaded images
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// URL of a running WebDriver endpoint (e.g. chromedriver)
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Run the browser headless
    #[arg(long)]
    pub headless: bool,

    /// Path to a JSON work item with search_phrase/months/sections
    #[arg(long, env = "RC_WORKITEM_FILE")]
    pub work_item_file: Option<String>,

    /// Override the search phrase
    #[arg(long)]
    pub search_phrase: Option<String>,

    /// Override the number of months back (0-12)
    #[arg(long)]
    pub months: Option<u32>,

    /// Override the section filter (repeatable)
    #[arg(long = "section")]
    pub sections: Vec<String>,
}
