//! Date-range computation for the "Specific Dates" search filter.
//!
//! The site filter takes an inclusive start/end pair. A run asks for news
//! from the last `months` months (0-12):
//!
//! - months 0 or 1: the current calendar month only
//! - months 2..=12: from the first day of the month `months - 1` months ago
//!   through the last day of the current month
//!
//! Both endpoints are whole-month boundaries, so the computation only ever
//! deals in (year, month) pairs and never shifts a mid-month day around.

use chrono::{Datelike, NaiveDate};
use std::error::Error;

/// Compute the inclusive `(start, end)` date range for a search.
///
/// # Arguments
///
/// * `today` - The date the run happens on
/// * `months` - Months back to include, 0-12
///
/// # Errors
///
/// Returns an error if `months` is greater than 12.
pub fn search_date_range(
    today: NaiveDate,
    months: u32,
) -> Result<(NaiveDate, NaiveDate), Box<dyn Error>> {
    if months > 12 {
        return Err(format!("months must be in range 0-12, got {}", months).into());
    }

    let start = if months <= 1 {
        first_day_of_month(today.year(), today.month())
    } else {
        let (year, month) = shift_months_back(today.year(), today.month(), months - 1);
        first_day_of_month(year, month)
    };
    let end = last_day_of_month(today.year(), today.month());

    Ok((start, end))
}

/// Format a date the way the site's date inputs expect it, `MM/DD/YYYY`.
pub fn format_for_date_input(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    // Month is always 1-12 here, coming from chrono itself.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_day_of_month(next_year, next_month).pred_opt().unwrap()
}

fn shift_months_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    // Work in zero-based months so the year borrow is a plain div/rem.
    let total = year * 12 + (month as i32 - 1) - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_zero_is_current_month() {
        let (start, end) = search_date_range(date(2025, 8, 23), 0).unwrap();
        assert_eq!(start, date(2025, 8, 1));
        assert_eq!(end, date(2025, 8, 31));
    }

    #[test]
    fn test_months_one_matches_months_zero() {
        let zero = search_date_range(date(2025, 8, 23), 0).unwrap();
        let one = search_date_range(date(2025, 8, 23), 1).unwrap();
        assert_eq!(zero, one);
    }

    #[test]
    fn test_months_three_starts_two_months_back() {
        let (start, end) = search_date_range(date(2025, 8, 23), 3).unwrap();
        assert_eq!(start, date(2025, 6, 1));
        assert_eq!(end, date(2025, 8, 31));
    }

    #[test]
    fn test_months_twelve_crosses_year_boundary() {
        let (start, end) = search_date_range(date(2025, 8, 23), 12).unwrap();
        assert_eq!(start, date(2024, 9, 1));
        assert_eq!(end, date(2025, 8, 31));
    }

    #[test]
    fn test_january_underflow() {
        let (start, end) = search_date_range(date(2025, 1, 15), 4).unwrap();
        assert_eq!(start, date(2024, 10, 1));
        assert_eq!(end, date(2025, 1, 31));
    }

    #[test]
    fn test_leap_february_end_day() {
        let (start, end) = search_date_range(date(2024, 2, 10), 2).unwrap();
        assert_eq!(start, date(2024, 1, 1));
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn test_non_leap_february_end_day() {
        let (_, end) = search_date_range(date(2025, 2, 10), 0).unwrap();
        assert_eq!(end, date(2025, 2, 28));
    }

    #[test]
    fn test_every_valid_month_count_accepted() {
        for months in 0..=12 {
            assert!(search_date_range(date(2025, 8, 23), months).is_ok());
        }
    }

    #[test]
    fn test_months_out_of_range_rejected() {
        assert!(search_date_range(date(2025, 8, 23), 13).is_err());
    }

    #[test]
    fn test_date_input_format() {
        assert_eq!(format_for_date_input(date(2025, 6, 1)), "06/01/2025");
        assert_eq!(format_for_date_input(date(2024, 12, 31)), "12/31/2024");
    }
}
