//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// English month names in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a post date into a calendar date
///
/// Accepts plain `YYYY-MM-DD` dates as well as the date-time shapes authors
/// tend to paste into front-matter; the time part is discarded.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Full month name for a date
pub fn month_name(date: &NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Position of a month name in the calendar (0-based)
pub fn month_index(name: &str) -> Option<usize> {
    MONTH_NAMES.iter().position(|m| *m == name)
}

/// Format date in full format (like "January 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    format!("{} {}, {}", month_name(date), date.day(), date.year())
}
