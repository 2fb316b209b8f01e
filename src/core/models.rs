//! Result types produced by the aggregation engine.
//!
//! Field names are the serialization keys consumed downstream; renaming a
//! field changes the output document.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::message::MessageKind;

/// First and last calendar date in the transcript, as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Headline numbers for the whole transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of parsed records.
    pub total_messages: usize,
    /// Distinct senders in order of first appearance.
    pub participants: Vec<String>,
    pub date_range: DateRange,
    /// Words across text messages only.
    pub total_words: usize,
    /// Whole days between the earliest and latest message, rounded down.
    pub chat_duration_days: i64,
}

/// All views computed from one record sequence.
///
/// Ordered views use [`BTreeMap`]; views whose order is first appearance
/// use [`IndexMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: Summary,
    pub messages_per_year: BTreeMap<i32, usize>,
    pub messages_per_month: BTreeMap<String, usize>,
    pub messages_per_participant: IndexMap<String, usize>,
    pub message_types_per_participant: IndexMap<String, IndexMap<MessageKind, usize>>,
    pub messages_per_hour: BTreeMap<u32, usize>,
    pub messages_per_weekday: IndexMap<String, usize>,
    /// `(YYYY-MM-DD, count)` pairs, busiest first.
    pub most_active_days: Vec<(String, usize)>,
    pub word_counts: IndexMap<String, usize>,
    /// Senders without text messages serialize as integer `0`.
    #[serde(serialize_with = "serialize_averages")]
    pub avg_message_length: IndexMap<String, f64>,
}

fn serialize_averages<S: Serializer>(
    averages: &IndexMap<String, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(averages.len()))?;
    for (sender, avg) in averages {
        if *avg > 0.0 {
            map.serialize_entry(sender, avg)?;
        } else {
            map.serialize_entry(sender, &0u64)?;
        }
    }
    map.end()
}

impl AnalysisResult {
    /// Returns the number of records the result was built from.
    pub fn total_messages(&self) -> usize {
        self.summary.total_messages
    }

    /// Returns the participants in order of first appearance.
    pub fn participants(&self) -> &[String] {
        &self.summary.participants
    }

    /// Returns how many messages of `kind` a participant sent.
    pub fn kind_count(&self, participant: &str, kind: MessageKind) -> usize {
        self.message_types_per_participant
            .get(participant)
            .and_then(|kinds| kinds.get(&kind))
            .copied()
            .unwrap_or(0)
    }
}

/// Document emitted in place of a result when a transcript has no messages.
///
/// Serializes as `{"error": "No messages found in the chat"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyReport {
    pub error: String,
}

impl EmptyReport {
    pub fn new() -> Self {
        Self {
            error: crate::ChatstatsError::EmptyTranscript.to_string(),
        }
    }
}

impl Default for EmptyReport {
    fn default() -> Self {
        Self::new()
    }
}
