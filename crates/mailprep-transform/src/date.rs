//! Date parsing through an ordered layout list.

use chrono::{DateTime, Datelike, NaiveDate};

/// Layouts tried in order. Month and day accept one or two digits.
const DATE_LAYOUTS: [&str; 6] = [
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m/%d/%y",
    "%m-%d-%y",
    "%Y/%m/%d",
    "%Y-%m-%d",
];

/// Parse a date string against the layout list, falling back to an RFC 3339
/// timestamp. Empty input or no matching layout yields `None` — an absent
/// date, not an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            // A two-digit year must fall through to the %y layouts instead
            // of parsing as year 0–99.
            if layout.contains("%Y") && date.year() < 100 {
                continue;
            }
            return Some(date);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn slash_and_dash_layouts() {
        assert_eq!(parse_date("12/31/2003"), Some(date(2003, 12, 31)));
        assert_eq!(parse_date("12-31-2003"), Some(date(2003, 12, 31)));
        assert_eq!(parse_date("1/2/2003"), Some(date(2003, 1, 2)));
    }

    #[test]
    fn two_digit_years_pivot_to_the_right_century() {
        assert_eq!(parse_date("1-3-03"), Some(date(2003, 1, 3)));
        assert_eq!(parse_date("1/3/99"), Some(date(1999, 1, 3)));
    }

    #[test]
    fn year_first_layouts() {
        assert_eq!(parse_date("2003/12/31"), Some(date(2003, 12, 31)));
        assert_eq!(parse_date("2003-1-2"), Some(date(2003, 1, 2)));
    }

    #[test]
    fn rfc3339_timestamps() {
        assert_eq!(
            parse_date("2003-12-31T10:30:00Z"),
            Some(date(2003, 12, 31))
        );
        assert_eq!(
            parse_date("2003-12-31T10:30:00-08:00"),
            Some(date(2003, 12, 31))
        );
    }

    #[test]
    fn unparseable_input_is_absent() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("31/12/2003"), None); // day-first is not a layout
        assert_eq!(parse_date("not a date"), None);
    }
}
