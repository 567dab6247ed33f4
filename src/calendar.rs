//! Calendar arithmetic for payoff dates and schedule labels
//!
//! All helpers work on whole calendar units. Adding a year to Feb 29 lands on
//! Feb 28 when the target year is not a leap year; adding months rolls the
//! year over and clamps the day to the end of the target month.

use chrono::{Datelike, Months, NaiveDate};

/// Label format for monthly rows and payoff dates ("Jan 2025")
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Label format for yearly rows ("2025")
pub const YEAR_LABEL_FORMAT: &str = "%Y";

/// Advance a date by whole years, clamping Feb 29 to Feb 28 in non-leap years
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let target_year = date.year() + years as i32;
    date.with_year(target_year)
        .or_else(|| NaiveDate::from_ymd_opt(target_year, date.month(), 28))
        .unwrap_or(NaiveDate::MAX)
}

/// Advance a date by whole calendar months
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Calendar year reached after advancing `years` whole years
pub fn year_label(date: NaiveDate, years: u32) -> i32 {
    date.year() + years as i32
}

/// Format a date as a month label ("Mar 2031")
pub fn month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        assert_eq!(add_years(ymd(2024, 2, 29), 1), ymd(2025, 2, 28));
        assert_eq!(add_years(ymd(2024, 2, 29), 30), ymd(2054, 2, 28));
    }

    #[test]
    fn test_leap_day_kept_in_leap_year() {
        assert_eq!(add_years(ymd(2024, 2, 29), 4), ymd(2028, 2, 29));
    }

    #[test]
    fn test_add_years_ordinary_date() {
        assert_eq!(add_years(ymd(2025, 6, 15), 30), ymd(2055, 6, 15));
        assert_eq!(add_years(ymd(2025, 6, 15), 0), ymd(2025, 6, 15));
    }

    #[test]
    fn test_add_months_rolls_year() {
        assert_eq!(add_months(ymd(2024, 11, 10), 1), ymd(2024, 12, 10));
        assert_eq!(add_months(ymd(2024, 12, 10), 1), ymd(2025, 1, 10));
        assert_eq!(add_months(ymd(2024, 1, 10), 359), ymd(2053, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2025, 1, 31), 1), ymd(2025, 2, 28));
    }

    #[test]
    fn test_labels() {
        assert_eq!(month_label(ymd(2025, 3, 1)), "Mar 2025");
        assert_eq!(year_label(ymd(2025, 3, 1), 4), 2029);
    }
}
