//! Parsed message records.
//!
//! This module provides [`MessageRecord`], the structured form of one
//! transcript line, and [`MessageKind`], its content-type classification.
//!
//! Records are immutable: the parser builds each one exactly once and the
//! aggregation engine only reads them. The `kind` of a record is always
//! derived from its content, so a record cannot carry a kind that disagrees
//! with its body.
//!
//! # Example
//!
//! ```
//! use chatstats::{MessageKind, MessageRecord};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let msg = MessageRecord::new(ts, "  Alice ", " image omitted ");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.content(), "image omitted");
//! assert_eq!(msg.kind(), MessageKind::Image);
//! assert_eq!(msg.weekday_name(), "Sunday");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::parsing::classify_content;

/// Content-type classification of a message.
///
/// Exports replace attachments with a localized placeholder such as
/// `image omitted` or `imagen omitida`; anything else is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text message
    Text,
    /// Image placeholder
    Image,
    /// Sticker placeholder
    Sticker,
    /// Voice note or audio placeholder
    Audio,
    /// Video placeholder
    Video,
    /// Document placeholder
    Document,
}

impl MessageKind {
    /// Classifies message content. See [`classify_content`].
    pub fn classify(content: &str) -> Self {
        classify_content(content)
    }

    /// Returns the lowercase name used as a serialization key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Image => "image",
            MessageKind::Sticker => "sticker",
            MessageKind::Audio => "audio",
            MessageKind::Video => "video",
            MessageKind::Document => "document",
        }
    }

    /// Returns all kinds in declaration order.
    pub fn all() -> &'static [MessageKind] {
        &[
            MessageKind::Text,
            MessageKind::Image,
            MessageKind::Sticker,
            MessageKind::Audio,
            MessageKind::Video,
            MessageKind::Document,
        ]
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One successfully parsed transcript line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local wall-clock time from the export |
/// | `sender` | `String` | Display name, trimmed |
/// | `content` | `String` | Message body, trimmed |
/// | `kind` | `MessageKind` | Derived from `content` |
///
/// Timestamps carry no timezone: exports record the sender's local clock
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    content: String,
    kind: MessageKind,
}

impl MessageRecord {
    /// Creates a record, trimming sender and content and classifying the
    /// content.
    pub fn new(timestamp: NaiveDateTime, sender: &str, content: &str) -> Self {
        let content = content.trim();
        Self {
            timestamp,
            sender: sender.trim().to_string(),
            content: content.to_string(),
            kind: MessageKind::classify(content),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the content classification.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns `true` for plain text messages.
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    // =========================================================================
    // Derived calendar keys
    // =========================================================================

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// English weekday name, `Monday` through `Sunday`.
    pub fn weekday_name(&self) -> &'static str {
        match self.timestamp.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn date_key(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Year and zero-padded month as `YYYY-MM`.
    pub fn month_key(&self) -> String {
        format!("{}-{:02}", self.year(), self.month())
    }

    // =========================================================================
    // Content metrics
    // =========================================================================

    /// Number of whitespace-delimited tokens in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Content length in characters (Unicode scalar values, not bytes).
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_record_trims_fields() {
        let msg = MessageRecord::new(ts(2024, 6, 15, 12), "  Bob\t", "  hi there  ");
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.content(), "hi there");
        assert!(msg.is_text());
    }

    #[test]
    fn test_kind_follows_content() {
        let msg = MessageRecord::new(ts(2024, 6, 15, 12), "Bob", "STICKER OMITTED");
        assert_eq!(msg.kind(), MessageKind::Sticker);
        assert!(!msg.is_text());
    }

    #[test]
    fn test_calendar_keys() {
        let msg = MessageRecord::new(ts(2024, 3, 5, 23), "Alice", "late");
        assert_eq!(msg.year(), 2024);
        assert_eq!(msg.month(), 3);
        assert_eq!(msg.hour(), 23);
        assert_eq!(msg.date_key(), "2024-03-05");
        assert_eq!(msg.month_key(), "2024-03");
        assert_eq!(msg.weekday_name(), "Tuesday");
    }

    #[test]
    fn test_word_count_and_char_len() {
        let msg = MessageRecord::new(ts(2024, 1, 1, 0), "Алиса", "Привет  мир\tсегодня");
        assert_eq!(msg.word_count(), 3);
        assert_eq!(msg.char_len(), 19);
    }

    #[test]
    fn test_kind_display_and_serde() {
        assert_eq!(MessageKind::Document.to_string(), "document");
        let json = serde_json::to_string(&MessageKind::Audio).unwrap();
        assert_eq!(json, "\"audio\"");
        assert_eq!(MessageKind::all().len(), 6);
    }
}
