//! Line grammar of the bracketed WhatsApp export.
//!
//! Every message line looks like
//!
//! ```text
//! [15/01/2024, 10:30:45] Sender Name: Message body
//! [1/2/23, 9:05:00] Sender Name: Message body
//! ```
//!
//! Day comes first, the year has two or four digits, seconds are always
//! present. Lines that do not follow this shape (wrapped continuations,
//! system notices) are not messages.

use chrono::{NaiveDateTime, Timelike};

/// Regex for one message line.
///
/// Captures: 1 = date, 2 = time, 3 = sender, 4 = body.
pub const LINE_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}:\d{2})\]\s([^:]+):\s(.+)";

/// Directional marks some exporters inject around timestamps.
const DIRECTION_MARKS: [char; 2] = ['\u{200E}', '\u{200F}'];

/// Two-digit years below this value belong to the 2000s, the rest to the
/// 1900s (POSIX `%y` convention).
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Year width of the date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFormat {
    /// `DD/MM/YY`
    /// Example: [01/02/23, 09:00:00]
    TwoDigit,
    /// `DD/MM/YYYY`
    /// Example: [01/02/2023, 09:00:00]
    FourDigit,
}

impl YearFormat {
    /// Picks the year width from the year component of a date.
    ///
    /// Any width other than 2 or 4 is rejected.
    pub fn detect(year: &str) -> Option<Self> {
        match year.chars().count() {
            2 => Some(YearFormat::TwoDigit),
            4 => Some(YearFormat::FourDigit),
            _ => None,
        }
    }

    /// Expands the year component to a full calendar year.
    ///
    /// Year `0000` has no calendar year and is rejected.
    pub fn full_year(self, year: &str) -> Option<i32> {
        let value: i32 = year.parse().ok()?;
        match self {
            YearFormat::TwoDigit if value < TWO_DIGIT_YEAR_PIVOT => Some(2000 + value),
            YearFormat::TwoDigit => Some(1900 + value),
            YearFormat::FourDigit if value == 0 => None,
            YearFormat::FourDigit => Some(value),
        }
    }
}

/// Trims the line and strips LTR/RTL marks.
///
/// Whitespace is trimmed before the marks are removed, so a line that is
/// only marks and spaces ends up empty.
pub fn clean_line(line: &str) -> String {
    line.trim().replace(DIRECTION_MARKS, "")
}

/// Parses the date and time captures into a timestamp.
///
/// Returns `None` for impossible calendar values (day 32, hour 25, second
/// 60, year 0), an unsupported year width or non-ASCII digits.
pub fn parse_whatsapp_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let (day_month, year) = date_str.rsplit_once('/')?;
    let year = YearFormat::detect(year)?.full_year(year)?;
    let datetime_str = format!("{day_month}/{year:04} {time_str}");
    NaiveDateTime::parse_from_str(&datetime_str, "%d/%m/%Y %H:%M:%S")
        .ok()
        // chrono represents :60 as a leap second
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}
