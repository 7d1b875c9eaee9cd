//! The browsing workflow: one fixed pipeline of UI actions.
//!
//! A run opens the site, searches the phrase, applies the section, sort, and
//! date filters, clicks "Show More" until the result list stops growing, and
//! then scrapes the final DOM in a single pass. Only two failures are
//! tolerated: a missing cookie-consent banner and a stale/vanished
//! "Show More" button. Everything else propagates to the caller.
//!
//! All XPath selectors for UI actions live here as constants, next to the
//! CSS selectors in [`crate::scrape`], since selector maintenance against
//! the third-party markup is the most change-prone part of the system.

use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::analyze::{contains_money, phrase_count};
use crate::browser::Browser;
use crate::dates::{format_for_date_input, search_date_range};
use crate::models::{ArticleRecord, SearchParams};
use crate::outputs::images;
use crate::scrape::{parse_search_results, SearchResultRow};
use crate::utils::upcase;

const SITE_URL: &str = "https://www.nytimes.com/";

const SEARCH_BUTTON: &str = r#"//button[@data-test-id="search-button"]"#;
const SEARCH_INPUT: &str = r#"//input[@name="query"]"#;
const SEARCH_GO_BUTTON: &str = r#"//button[text()="Go"]"#;
const SECTION_MULTISELECT: &str = r#"//button[contains(@data-testid,"multiselect")][1]"#;
const SORT_SELECT: &str = r#"//select[@class="css-v7it2b"]"#;
const DATE_RANGE_BUTTON: &str = r#"//button[contains(@data-testid,"search-date")]"#;
const SPECIFIC_DATES_BUTTON: &str = r#"//button[text()="Specific Dates"]"#;
const START_DATE_INPUT: &str = r#"//input[@id="startDate"]"#;
const END_DATE_INPUT: &str = r#"//input[@id="endDate"]"#;
const COOKIE_ACCEPT_BUTTON: &str = r#"//button[@class='css-1qw5f1g']"#;
const SHOW_MORE_BUTTON: &str = r#"//button[text()='Show More']"#;

/// Drives one search-and-scrape run against the site.
pub struct NewsRobot {
    browser: Browser,
    params: SearchParams,
    http: Client,
    images_dir: PathBuf,
}

impl NewsRobot {
    pub fn new(browser: Browser, params: SearchParams, images_dir: PathBuf) -> Self {
        NewsRobot {
            browser,
            params,
            http: Client::new(),
            images_dir,
        }
    }

    /// Run the whole workflow and return the collected records.
    pub async fn run(&self) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
        self.open_site().await?;
        self.search_phrase().await?;
        self.select_sections().await?;
        self.select_newest().await?;
        self.select_date_range().await?;
        self.dismiss_cookie_banner().await;
        self.expand_all_results().await?;
        self.collect_articles().await
    }

    /// Quit the underlying browser session.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.browser.close().await?;
        Ok(())
    }

    #[instrument(level = "info", skip_all)]
    async fn open_site(&self) -> Result<(), Box<dyn Error>> {
        info!(url = SITE_URL, "Opening the site");
        self.browser.goto(SITE_URL).await?;
        Ok(())
    }

    #[instrument(level = "info", skip_all, fields(phrase = %self.params.search_phrase))]
    async fn search_phrase(&self) -> Result<(), Box<dyn Error>> {
        info!("Searching the phrase");
        self.browser.click_when_present(SEARCH_BUTTON).await?;
        self.browser
            .fill(SEARCH_INPUT, &self.params.search_phrase)
            .await?;
        self.browser.click_when_present(SEARCH_GO_BUTTON).await?;
        Ok(())
    }

    #[instrument(level = "info", skip_all, fields(sections = ?self.params.sections))]
    async fn select_sections(&self) -> Result<(), Box<dyn Error>> {
        if self.params.sections.is_empty() {
            debug!("No section filter requested");
            return Ok(());
        }

        info!("Selecting news sections");
        self.browser.click_when_present(SECTION_MULTISELECT).await?;
        for section in &self.params.sections {
            let checkbox = format!("//input[contains(@value, '{}')]", upcase(section));
            self.browser.click_when_present(&checkbox).await?;
        }
        Ok(())
    }

    #[instrument(level = "info", skip_all)]
    async fn select_newest(&self) -> Result<(), Box<dyn Error>> {
        info!("Sorting by newest");
        self.browser.select_by_value(SORT_SELECT, "newest").await?;
        Ok(())
    }

    #[instrument(level = "info", skip_all, fields(months = self.params.months))]
    async fn select_date_range(&self) -> Result<(), Box<dyn Error>> {
        let today = Local::now().date_naive();
        let (start, end) = search_date_range(today, self.params.months)?;
        let start = format_for_date_input(start);
        let end = format_for_date_input(end);
        info!(%start, %end, "Applying the date range filter");

        self.browser.click_when_present(DATE_RANGE_BUTTON).await?;
        self.browser
            .click_when_present(SPECIFIC_DATES_BUTTON)
            .await?;
        self.browser.fill(START_DATE_INPUT, &start).await?;
        self.browser.fill(END_DATE_INPUT, &end).await?;
        self.browser.press_enter(END_DATE_INPUT).await?;
        Ok(())
    }

    /// Best effort: the banner only shows up for fresh sessions in some
    /// regions, so a missing button is expected and swallowed.
    #[instrument(level = "info", skip_all)]
    async fn dismiss_cookie_banner(&self) {
        match self.browser.click_when_present(COOKIE_ACCEPT_BUTTON).await {
            Ok(()) => info!("Dismissed the cookie banner"),
            Err(e) => debug!(error = %e, "No cookie banner to dismiss"),
        }
    }

    /// Click "Show More" until the button is gone.
    ///
    /// The button goes stale whenever a click swaps the result list under
    /// it; such errors end pagination rather than the run.
    #[instrument(level = "info", skip_all)]
    async fn expand_all_results(&self) -> Result<(), Box<dyn Error>> {
        info!("Expanding the search results");
        let mut clicks = 0usize;
        loop {
            if !self.browser.exists_now(SHOW_MORE_BUTTON).await? {
                break;
            }
            match self.click_show_more().await {
                Ok(()) => clicks += 1,
                Err(e) => {
                    debug!(error = %e, "Show More vanished mid-click; pagination done");
                    break;
                }
            }
        }
        info!(clicks, "Finished expanding results");
        Ok(())
    }

    async fn click_show_more(&self) -> Result<(), Box<dyn Error>> {
        let button = self.browser.find_when_present(SHOW_MORE_BUTTON).await?;
        button.scroll_into_view().await?;
        button.click().await?;
        Ok(())
    }

    /// Scrape the fully expanded result list in one pass, dedup by title,
    /// analyze each row, and download thumbnails.
    #[instrument(level = "info", skip_all)]
    async fn collect_articles(&self) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
        info!("Collecting the search results");
        let page_source = self.browser.page_source().await?;
        let rows = dedup_rows(parse_search_results(&page_source));

        let records: Vec<ArticleRecord> = stream::iter(rows)
            .then(|row| self.build_record(row))
            .collect()
            .await;

        info!(count = records.len(), "Collected article records");
        Ok(records)
    }

    async fn build_record(&self, row: SearchResultRow) -> ArticleRecord {
        let haystack = format!("{} {}", row.title, row.description);
        let picture_filename = match &row.image_url {
            Some(url) => {
                images::download_thumbnail(&self.http, url, &self.images_dir, &row.title).await
            }
            None => {
                warn!(title = %row.title, "Result row has no thumbnail");
                None
            }
        };

        ArticleRecord {
            phrase_count: phrase_count(&haystack, &self.params.search_phrase),
            contains_money: contains_money(&haystack),
            title: row.title,
            date: row.date,
            description: row.description,
            picture_filename,
        }
    }
}

/// Drop rows whose title was already seen, keeping the first occurrence.
///
/// Titles are unique within a run; dedup happens before analysis and
/// downloads so a duplicate never costs a second image fetch.
fn dedup_rows(rows: Vec<SearchResultRow>) -> Vec<SearchResultRow> {
    rows.into_iter().unique_by(|r| r.title.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, description: &str) -> SearchResultRow {
        SearchResultRow {
            title: title.to_string(),
            date: "Aug. 5".to_string(),
            description: description.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_dedup_rows_keeps_first_occurrence() {
        let rows = vec![
            row("AI boom continues", "first teaser"),
            row("Markets rally", "unrelated"),
            row("AI boom continues", "second teaser"),
        ];

        let deduped = dedup_rows(rows);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "AI boom continues");
        assert_eq!(deduped[0].description, "first teaser");
        assert_eq!(deduped[1].title, "Markets rally");
    }

    #[test]
    fn test_dedup_rows_without_duplicates_is_identity() {
        let rows = vec![row("One", "a"), row("Two", "b")];
        assert_eq!(dedup_rows(rows.clone()), rows);
    }
}
