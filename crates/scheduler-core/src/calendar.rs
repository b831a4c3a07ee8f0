//! Calendar arithmetic shared by the date advancer.
//!
//! Everything here works on [`NaiveDate`]: there is no time of day and no
//! timezone anywhere in the scheduler's date math.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Wire format of every date the scheduler reads or writes.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parses a strict 8-digit `YYYYMMDD` date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Day zero of the following month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_day_of_month(date) + Months::new(1) - Days::new(1)
}

pub fn last_day_of_next_month(date: NaiveDate) -> NaiveDate {
    last_day_of_month(first_day_of_month(date) + Months::new(1))
}

/// ISO weekday number, 1 = Monday through 7 = Sunday.
pub fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Days from `date` forward to the next `weekday` (ISO numbering), zero when
/// `date` already falls on it.
pub fn days_until_weekday(date: NaiveDate, weekday: u32) -> u32 {
    (weekday + 7 - iso_weekday(date)) % 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(parse_date("20240229"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("20230229"), None);
        assert_eq!(parse_date("2024-01-01"), None);
        assert_eq!(parse_date("2024011"), None);
        assert_eq!(parse_date("+2024011"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date_pads() {
        assert_eq!(format_date(ymd(2024, 3, 5)), "20240305");
        assert_eq!(format_date(ymd(999, 1, 1)), "09990101");
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(first_day_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 1));
        assert_eq!(last_day_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(ymd(2023, 2, 1)), ymd(2023, 2, 28));
        assert_eq!(last_day_of_month(ymd(2024, 4, 30)), ymd(2024, 4, 30));
        assert_eq!(last_day_of_month(ymd(2024, 12, 5)), ymd(2024, 12, 31));
    }

    #[test]
    fn test_last_day_of_next_month_rolls_year() {
        assert_eq!(last_day_of_next_month(ymd(2024, 12, 31)), ymd(2025, 1, 31));
        assert_eq!(last_day_of_next_month(ymd(2024, 1, 31)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_next_month(ymd(2025, 1, 31)), ymd(2025, 2, 28));
    }

    #[test]
    fn test_weekday_arithmetic() {
        // 2024-03-05 is a Tuesday
        let tuesday = ymd(2024, 3, 5);
        assert_eq!(iso_weekday(tuesday), 2);
        assert_eq!(days_until_weekday(tuesday, 2), 0);
        assert_eq!(days_until_weekday(tuesday, 3), 1);
        assert_eq!(days_until_weekday(tuesday, 1), 6);
        assert_eq!(days_until_weekday(tuesday, 7), 5);
    }
}
