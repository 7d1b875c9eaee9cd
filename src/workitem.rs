//! Work-item input plumbing.
//!
//! An orchestrator supplies run parameters as a JSON work item and points the
//! process at it through `RC_WORKITEM_FILE`. When no work item is available
//! (a local run) a hardcoded fallback is used. CLI flags override either
//! source field by field.
//!
//! Work item shape:
//!
//! ```json
//! {"search_phrase": "Artificial Intelligence", "months": 3,
//!  "sections": ["arts", "books", "opinion"]}
//! ```

use std::error::Error;
use std::fs;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::models::SearchParams;

/// Hardcoded parameters for runs without a work item.
fn fallback_params() -> SearchParams {
    SearchParams {
        search_phrase: "Artificial Intelligence".to_string(),
        months: 3,
        sections: vec![
            "arts".to_string(),
            "books".to_string(),
            "opinion".to_string(),
        ],
    }
}

/// Resolve the search parameters for this run.
///
/// Precedence: CLI overrides > work-item file > hardcoded fallback.
///
/// # Errors
///
/// Returns an error if the work-item file cannot be read or parsed, or if
/// the resolved `months` is outside 0-12.
pub fn load_params(cli: &Cli) -> Result<SearchParams, Box<dyn Error>> {
    let mut params = match &cli.work_item_file {
        Some(path) => {
            info!(%path, "Loading work item");
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read work item {}: {}", path, e))?;
            serde_json::from_str::<SearchParams>(&raw)
                .map_err(|e| format!("failed to parse work item {}: {}", path, e))?
        }
        None => {
            if std::env::var("RC_PROCESS_ID").is_ok() {
                warn!("RC_PROCESS_ID is set but no work item file was provided; using fallback parameters");
            } else {
                info!("No work item; using fallback parameters");
            }
            fallback_params()
        }
    };

    if let Some(phrase) = &cli.search_phrase {
        params.search_phrase = phrase.clone();
    }
    if let Some(months) = cli.months {
        params.months = months;
    }
    if !cli.sections.is_empty() {
        params.sections = cli.sections.clone();
    }

    if params.months > 12 {
        return Err(format!("months must be in range 0-12, got {}", params.months).into());
    }

    info!(
        search_phrase = %params.search_phrase,
        months = params.months,
        sections = ?params.sections,
        "Resolved run parameters"
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["nyt_news_robot"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn work_item_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fallback_when_no_work_item() {
        let params = load_params(&cli(&[])).unwrap();
        assert_eq!(params.search_phrase, "Artificial Intelligence");
        assert_eq!(params.months, 3);
        assert_eq!(params.sections, vec!["arts", "books", "opinion"]);
    }

    #[test]
    fn test_work_item_file_is_loaded() {
        let file = work_item_file(
            r#"{"search_phrase": "elections", "months": 1, "sections": ["politics"]}"#,
        );
        let path = file.path().to_str().unwrap();
        let params = load_params(&cli(&["--work-item-file", path])).unwrap();
        assert_eq!(params.search_phrase, "elections");
        assert_eq!(params.months, 1);
        assert_eq!(params.sections, vec!["politics"]);
    }

    #[test]
    fn test_cli_overrides_work_item() {
        let file = work_item_file(r#"{"search_phrase": "elections", "months": 1}"#);
        let path = file.path().to_str().unwrap();
        let params = load_params(&cli(&[
            "--work-item-file",
            path,
            "--search-phrase",
            "economy",
            "--months",
            "5",
            "--section",
            "business",
        ]))
        .unwrap();

        assert_eq!(params.search_phrase, "economy");
        assert_eq!(params.months, 5);
        assert_eq!(params.sections, vec!["business"]);
    }

    #[test]
    fn test_months_out_of_range_is_rejected() {
        assert!(load_params(&cli(&["--months", "13"])).is_err());
    }

    #[test]
    fn test_malformed_work_item_is_an_error() {
        let file = work_item_file("{not json");
        let path = file.path().to_str().unwrap();
        assert!(load_params(&cli(&["--work-item-file", path])).is_err());
    }

    #[test]
    fn test_missing_work_item_file_is_an_error() {
        assert!(load_params(&cli(&["--work-item-file", "/nonexistent/wi.json"])).is_err());
    }
}
