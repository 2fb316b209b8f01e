//! Aggregation engine.
//!
//! [`analyze`] derives every view of an [`AnalysisResult`] from a finished
//! record sequence. Each view is an independent pass over the same slice;
//! none depends on another.
//!
//! # Example
//!
//! ```
//! use chatstats::core::analyze;
//! use chatstats::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str(
//!     "[01/01/23, 09:00:00] Alice: Hello there\n\
//!      [01/01/23, 09:05:00] Bob: image omitted\n\
//!      [01/01/23, 23:00:00] Alice: good night",
//! )?;
//!
//! let result = analyze(&records)?;
//! assert_eq!(result.summary.total_messages, 3);
//! assert_eq!(result.word_counts["Alice"], 4);
//! assert!(!result.word_counts.contains_key("Bob"));
//! assert_eq!(result.avg_message_length["Bob"], 0.0);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::models::{AnalysisResult, DateRange, Summary};
use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::error::ChatstatsError;
use crate::message::MessageKind;

/// Computes an [`AnalysisResult`] with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Builds every view.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::EmptyTranscript`] when `records` is empty.
    pub fn analyze(&self, records: &[MessageRecord]) -> Result<AnalysisResult, ChatstatsError> {
        let summary = summary(records).ok_or(ChatstatsError::EmptyTranscript)?;

        let result = AnalysisResult {
            avg_message_length: avg_message_length(records, &summary.participants),
            summary,
            messages_per_year: messages_per_year(records),
            messages_per_month: messages_per_month(records),
            messages_per_participant: messages_per_participant(records),
            message_types_per_participant: message_types_per_participant(records),
            messages_per_hour: messages_per_hour(records),
            messages_per_weekday: messages_per_weekday(records),
            most_active_days: most_active_days(records, self.config.most_active_days_limit),
            word_counts: word_counts(records),
        };

        debug!(
            records = records.len(),
            participants = result.summary.participants.len(),
            days = result.summary.chat_duration_days,
            "analysis complete"
        );

        Ok(result)
    }
}

/// Builds every view with the default configuration.
///
/// # Errors
///
/// Returns [`ChatstatsError::EmptyTranscript`] when `records` is empty.
pub fn analyze(records: &[MessageRecord]) -> Result<AnalysisResult, ChatstatsError> {
    Analyzer::new().analyze(records)
}

// ============================================================================
// Views
// ============================================================================

/// Totals, participants, date range and duration. `None` for no records.
pub fn summary(records: &[MessageRecord]) -> Option<Summary> {
    let first = records.iter().map(MessageRecord::timestamp).min()?;
    let last = records.iter().map(MessageRecord::timestamp).max()?;

    let participants: IndexSet<&str> = records.iter().map(MessageRecord::sender).collect();

    let total_words = records
        .iter()
        .filter(|msg| msg.is_text())
        .map(MessageRecord::word_count)
        .sum();

    Some(Summary {
        total_messages: records.len(),
        participants: participants.into_iter().map(str::to_string).collect(),
        date_range: DateRange {
            start: first.format("%Y-%m-%d").to_string(),
            end: last.format("%Y-%m-%d").to_string(),
        },
        total_words,
        // last >= first, so truncation is a floor
        chat_duration_days: (last - first).num_days(),
    })
}

pub fn messages_per_year(records: &[MessageRecord]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for msg in records {
        *counts.entry(msg.year()).or_insert(0) += 1;
    }
    counts
}

/// Counts keyed by `YYYY-MM`; lexicographic order is chronological.
pub fn messages_per_month(records: &[MessageRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for msg in records {
        *counts.entry(msg.month_key()).or_insert(0) += 1;
    }
    counts
}

pub fn messages_per_participant(records: &[MessageRecord]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for msg in records {
        *counts.entry(msg.sender().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Sender → kind → count, both levels in first-observation order.
pub fn message_types_per_participant(
    records: &[MessageRecord],
) -> IndexMap<String, IndexMap<MessageKind, usize>> {
    let mut counts: IndexMap<String, IndexMap<MessageKind, usize>> = IndexMap::new();
    for msg in records {
        *counts
            .entry(msg.sender().to_string())
            .or_default()
            .entry(msg.kind())
            .or_insert(0) += 1;
    }
    counts
}

/// Hours without messages are absent.
pub fn messages_per_hour(records: &[MessageRecord]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for msg in records {
        *counts.entry(msg.hour()).or_insert(0) += 1;
    }
    counts
}

pub fn messages_per_weekday(records: &[MessageRecord]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for msg in records {
        *counts.entry(msg.weekday_name().to_string()).or_insert(0) += 1;
    }
    counts
}

/// The `limit` busiest calendar days, descending by count.
///
/// Ties keep the order in which the days were first seen.
pub fn most_active_days(records: &[MessageRecord], limit: usize) -> Vec<(String, usize)> {
    let mut daily: IndexMap<String, usize> = IndexMap::new();
    for msg in records {
        *daily.entry(msg.date_key()).or_insert(0) += 1;
    }

    let mut days: Vec<(String, usize)> = daily.into_iter().collect();
    // Stable sort
    days.sort_by(|a, b| b.1.cmp(&a.1));
    days.truncate(limit);
    days
}

/// Words per sender over text messages. Senders without text are absent.
pub fn word_counts(records: &[MessageRecord]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for msg in records.iter().filter(|msg| msg.is_text()) {
        *counts.entry(msg.sender().to_string()).or_insert(0) += msg.word_count();
    }
    counts
}

/// Mean text length per participant.
///
/// Every participant gets an entry; those without text messages get `0.0`.
pub fn avg_message_length(
    records: &[MessageRecord],
    participants: &[String],
) -> IndexMap<String, f64> {
    participants
        .iter()
        .map(|participant| {
            let (chars, count) = records
                .iter()
                .filter(|msg| msg.is_text() && msg.sender() == participant)
                .fold((0usize, 0usize), |(chars, count), msg| {
                    (chars + msg.char_len(), count + 1)
                });

            let avg = if count == 0 {
                0.0
            } else {
                chars as f64 / count as f64
            };
            (participant.clone(), avg)
        })
        .collect()
}
