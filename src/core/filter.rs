//! Filter records by date range and sender.
//!
//! [`FilterConfig`] holds the criteria and [`apply_filters`] narrows a
//! record vector before it reaches the aggregation engine.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | After | [`after_date`](FilterConfig::after_date) | Records on or after a date |
//! | Before | [`before_date`](FilterConfig::before_date) | Records on or before a date |
//! | Sender | [`with_user`](FilterConfig::with_user) | Records from one participant |
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::parser::TranscriptParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let records = TranscriptParser::new().parse_str(
//!     "[01/01/24, 12:00:00] Alice: Old\n\
//!      [15/06/24, 12:00:00] Alice: New\n\
//!      [15/06/24, 12:30:00] Bob: Also new",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .after_date("2024-06-01")?
//!     .with_user("alice");
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! Active filters combine with AND. Sender matching ignores ASCII case.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatstatsError;

/// Criteria for narrowing a record vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only records at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only records at or before this instant.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a filter that lets every record through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps records on or after the start of `date` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if `date` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn after_date(mut self, date: &str) -> Result<Self, ChatstatsError> {
        self.after = Some(parse_filter_date(date)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Keeps records on or before the last second of `date` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if `date` is not a valid
    /// `YYYY-MM-DD` date.
    pub fn before_date(mut self, date: &str) -> Result<Self, ChatstatsError> {
        let end_of_day = parse_filter_date(date)?
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatstatsError::invalid_date(date))?;
        self.before = Some(end_of_day);
        Ok(self)
    }

    /// Keeps only records from `user`. Matching ignores ASCII case.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.from = Some(user.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        let ts = record.timestamp();

        if self.after.is_some_and(|after| ts < after) {
            return false;
        }
        if self.before.is_some_and(|before| ts > before) {
            return false;
        }
        if let Some(ref from) = self.from {
            if !record.sender().eq_ignore_ascii_case(from) {
                return false;
            }
        }

        true
    }
}

fn parse_filter_date(date: &str) -> Result<NaiveDate, ChatstatsError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ChatstatsError::invalid_date(date))
}

/// Returns the records that pass every active filter, in their original
/// order. With no active filter the input is returned unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| config.matches(record))
        .collect()
}
