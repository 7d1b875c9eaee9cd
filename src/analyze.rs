//! Text analysis over scraped titles and descriptions.
//!
//! Two derived fields are computed for every article from the concatenation
//! of its title and description:
//! - how many times the search phrase occurs
//! - whether a monetary amount is mentioned

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches amounts like `$5,000`, `$12.99`, `100 usd`, or `25 dollars`.
/// A numeral is required, so spelled-out amounts ("five dollars") never match.
static MONEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$\d+,?\.?\d+|\d+\s*(?:usd|dollars)").unwrap());

/// Count non-overlapping, case-sensitive occurrences of `phrase` in `text`.
///
/// An empty phrase counts as zero occurrences.
pub fn phrase_count(text: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    text.matches(phrase).count()
}

/// Whether `text` mentions a monetary amount anywhere.
pub fn contains_money(text: &str) -> bool {
    MONEY_RE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_count_multiple_occurrences() {
        let text = "Artificial Intelligence is here. Artificial Intelligence is real.";
        assert_eq!(phrase_count(text, "Artificial Intelligence"), 2);
    }

    #[test]
    fn test_phrase_count_is_case_sensitive() {
        assert_eq!(phrase_count("artificial intelligence", "Artificial Intelligence"), 0);
    }

    #[test]
    fn test_phrase_count_no_match() {
        assert_eq!(phrase_count("Markets rally on jobs report", "climate"), 0);
    }

    #[test]
    fn test_phrase_count_empty_phrase() {
        assert_eq!(phrase_count("anything", ""), 0);
    }

    #[test]
    fn test_money_dollar_sign_with_comma() {
        assert!(contains_money("The deal is worth $5,000 according to filings"));
    }

    #[test]
    fn test_money_dollar_sign_with_decimal() {
        assert!(contains_money("Tickets start at $12.99 this weekend"));
    }

    #[test]
    fn test_money_numeral_with_usd() {
        assert!(contains_money("A fine of 100 USD was imposed"));
    }

    #[test]
    fn test_money_numeral_with_dollars_word() {
        assert!(contains_money("He paid 25 dollars for the book"));
    }

    #[test]
    fn test_money_spelled_out_amount_does_not_match() {
        // The pattern requires a numeral.
        assert!(!contains_money("five dollars worth of effort"));
    }

    #[test]
    fn test_money_absent() {
        assert!(!contains_money("A quiet day at the museum"));
    }

    #[test]
    fn test_money_mention_mid_string() {
        assert!(contains_money("Budget talks stall over a proposed $1,200 stipend"));
    }
}
