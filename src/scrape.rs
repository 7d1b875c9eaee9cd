//! Extraction of search-result rows from the final page source.
//!
//! Once pagination has finished the whole result list is present in the DOM,
//! so the page source is grabbed once and parsed here in a single pass. All
//! selectors target the site's generated class names and `data-testid`
//! attributes; they are the fragile part of the system and live together as
//! constants so a markup change is a one-file fix.

use scraper::{Html, Selector};
use tracing::{debug, info};

const RESULT_ROW: &str = r#"ol[data-testid="search-results"] li[data-testid="search-bodega-result"]"#;
const TITLE: &str = ".css-2fgx4k";
const DESCRIPTION: &str = ".css-16nhkrn";
const DATE: &str = ".css-17ubb9w";
const THUMBNAIL: &str = "img.css-rq4mmj";

/// One raw search-result row, before dedup and analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultRow {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Parse every search-result row out of a page source.
///
/// Rows without a title are skipped; a missing description, date, or
/// thumbnail degrades to an empty string or `None` rather than dropping
/// the row.
pub fn parse_search_results(page_source: &str) -> Vec<SearchResultRow> {
    let row_selector = Selector::parse(RESULT_ROW).unwrap();
    let title_selector = Selector::parse(TITLE).unwrap();
    let description_selector = Selector::parse(DESCRIPTION).unwrap();
    let date_selector = Selector::parse(DATE).unwrap();
    let thumbnail_selector = Selector::parse(THUMBNAIL).unwrap();

    let document = Html::parse_document(page_source);

    let mut rows = Vec::new();
    for row in document.select(&row_selector) {
        let title = match row.select(&title_selector).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => {
                debug!("Skipping result row without a title element");
                continue;
            }
        };
        if title.is_empty() {
            debug!("Skipping result row with an empty title");
            continue;
        }

        let description = row
            .select(&description_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let date = row
            .select(&date_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let image_url = row
            .select(&thumbnail_selector)
            .next()
            .and_then(|el| el.value().attr("src"))
            .map(|src| src.to_string());

        rows.push(SearchResultRow {
            title,
            date,
            description,
            image_url,
        });
    }

    info!(count = rows.len(), "Parsed search result rows");
    rows
}
