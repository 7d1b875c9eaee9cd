//! Data models for search parameters and scraped articles.
//!
//! This module defines the two core data structures of a run:
//! - [`SearchParams`]: the phrase/months/sections triple driving one search
//! - [`ArticleRecord`]: one scraped search result with its derived fields
//!
//! The record set for a run is an in-memory `Vec<ArticleRecord>` built in one
//! pass after pagination completes and flushed once to the spreadsheet.

use serde::Deserialize;

/// Parameters for a single automation run.
///
/// Usually deserialized from a JSON work item; see [`crate::workitem`] for
/// the fallback and override rules.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// The phrase to search news for.
    pub search_phrase: String,
    /// How many months back the results should reach (0-12).
    pub months: u32,
    /// Section/category names to filter by, e.g. `["arts", "opinion"]`.
    #[serde(default)]
    pub sections: Vec<String>,
}

/// One scraped search result with its derived analysis fields.
///
/// The publication date is kept exactly as displayed on the page; the site
/// renders relative forms like "Aug. 5" for recent articles and nothing in
/// the run depends on parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRecord {
    /// The article headline.
    pub title: String,
    /// Publication date as displayed, unparsed.
    pub date: String,
    /// The article teaser/description.
    pub description: String,
    /// Filename of the downloaded thumbnail, `None` if the row had no
    /// thumbnail or the download failed.
    pub picture_filename: Option<String>,
    /// Occurrences of the search phrase across title and description.
    pub phrase_count: usize,
    /// Whether title or description mentions a monetary amount.
    pub contains_money: bool,
}
