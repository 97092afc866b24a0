use std::fmt::Display;

use chrono::{DateTime, NaiveDate, TimeZone};

/// Short day label, e.g. `Tue, Nov 14`.
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Hour and minute, e.g. `22:13`.
#[must_use]
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%H:%M").to_string()
}

#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
