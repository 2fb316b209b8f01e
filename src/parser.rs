//! Transcript parser.
//!
//! [`TranscriptParser`] turns a whole exported transcript into an ordered
//! `Vec<MessageRecord>`, one record per line that matches the export
//! grammar (see [`parsing::whatsapp`](crate::parsing::whatsapp)).
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let transcript = "\
//! [01/01/23, 09:00:00] Alice: Hello there
//! a wrapped continuation line
//! [01/01/23, 09:05:00] Bob: image omitted";
//!
//! let records = TranscriptParser::new().parse_str(transcript)?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].sender(), "Bob");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```
//!
//! # Dropped lines
//!
//! Lines that do not match, and matching lines whose timestamp is not a
//! real calendar date, produce no record and no error. Multi-line messages
//! therefore keep only their first line. Records come out in transcript
//! order; nothing is sorted.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::MessageRecord;
use crate::error::ChatstatsError;
use crate::parsing::{LINE_PATTERN, clean_line, parse_whatsapp_timestamp};

/// Line counts collected during one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Total lines in the input.
    pub lines: usize,
    /// Lines that were empty after cleaning.
    pub blank: usize,
    /// Lines that did not match the message grammar.
    pub unmatched: usize,
    /// Matching lines with an impossible date or time.
    pub invalid_timestamp: usize,
    /// Records produced.
    pub records: usize,
}

impl ParseReport {
    /// Lines that looked like content but produced no record.
    pub fn dropped(&self) -> usize {
        self.unmatched + self.invalid_timestamp
    }
}

/// Parser for bracketed WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let records = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// - [`ChatstatsError::FileNotFound`] if the file does not exist
    /// - [`ChatstatsError::Utf8`] if the file is not UTF-8
    /// - [`ChatstatsError::Io`] for any other read failure
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>, ChatstatsError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ChatstatsError::file_not_found(path),
            _ => ChatstatsError::Io(e),
        })?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatstatsError::utf8(format!("reading {}", path.display()), e))?;
        self.parse_str(&content)
    }

    /// Reads and parses a transcript file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<MessageRecord>, ChatstatsError> {
        self.parse(Path::new(path))
    }

    /// Parses transcript content already in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>, ChatstatsError> {
        self.parse_str_with_report(content)
            .map(|(records, _)| records)
    }

    /// Parses transcript content and also returns the line counts.
    pub fn parse_str_with_report(
        &self,
        content: &str,
    ) -> Result<(Vec<MessageRecord>, ParseReport), ChatstatsError> {
        let regex = Regex::new(LINE_PATTERN)
            .map_err(|e| ChatstatsError::invalid_format("WhatsApp", e.to_string()))?;

        let mut report = ParseReport::default();
        let mut records: Vec<MessageRecord> = Vec::new();

        for raw in content.lines() {
            report.lines += 1;

            let line = clean_line(raw);
            if line.is_empty() {
                report.blank += 1;
                continue;
            }

            let Some(caps) = regex.captures(&line) else {
                report.unmatched += 1;
                continue;
            };

            let date_str = caps.get(1).map_or("", |m| m.as_str());
            let time_str = caps.get(2).map_or("", |m| m.as_str());
            let sender = caps.get(3).map_or("", |m| m.as_str());
            let body = caps.get(4).map_or("", |m| m.as_str());

            let Some(timestamp) = parse_whatsapp_timestamp(date_str, time_str) else {
                report.invalid_timestamp += 1;
                continue;
            };

            records.push(MessageRecord::new(timestamp, sender, body));
        }

        report.records = records.len();
        debug!(
            lines = report.lines,
            records = report.records,
            blank = report.blank,
            unmatched = report.unmatched,
            invalid_timestamp = report.invalid_timestamp,
            "parsed transcript"
        );

        Ok((records, report))
    }
}
