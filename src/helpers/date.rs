//! Date helper functions

use chrono::NaiveDateTime;

/// Format a date in full form (like "January 15, 2024")
pub fn full_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date for a `<time datetime>` attribute
pub fn iso_date(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}
