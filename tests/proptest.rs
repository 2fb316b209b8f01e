//! Property-based tests for chatstats.
//!
//! These tests generate random transcripts to find edge cases.

use std::collections::HashSet;

use proptest::prelude::*;

use chatstats::MessageKind;
use chatstats::config::AnalysisConfig;
use chatstats::core::{Analyzer, FilterConfig, analyze, apply_filters};
use chatstats::parser::TranscriptParser;
use chatstats::parsing::{classify_content, parse_whatsapp_timestamp};

/// One generated transcript line and what it should parse to.
#[derive(Debug, Clone)]
struct Line {
    day: u32,
    month: u32,
    year: u32,
    hour: u32,
    minute: u32,
    second: u32,
    four_digit_year: bool,
    sender: String,
    content: String,
}

impl Line {
    fn render(&self) -> String {
        let year = if self.four_digit_year {
            format!("{:04}", 2000 + self.year)
        } else {
            format!("{:02}", self.year)
        };
        format!(
            "[{}/{:02}/{}, {:02}:{:02}:{:02}] {}: {}",
            self.day, self.month, year, self.hour, self.minute, self.second, self.sender, self.content
        )
    }
}

/// Generate a valid line using fast strategies (no regex!)
fn arb_line() -> impl Strategy<Value = Line> {
    (
        (1u32..=28, 1u32..=12, 0u32..=68, any::<bool>()),
        (0u32..24, 0u32..60, 0u32..60),
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Charlie Brown".to_string(),
            "Иван".to_string(),
            "+1 555 0100".to_string(),
            "🔥User🔥".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "How are you?".to_string(),
            "Привет мир".to_string(),
            "🎉🔥💀 emoji".to_string(),
            "time: 10:30".to_string(),
            "image omitted".to_string(),
            "STICKER OMITTED".to_string(),
            "audio omitido".to_string(),
            "video omitted".to_string(),
            "documento omitido".to_string(),
        ]),
    )
        .prop_map(
            |((day, month, year, four_digit_year), (hour, minute, second), sender, content)| Line {
                day,
                month,
                year,
                hour,
                minute,
                second,
                four_digit_year,
                sender,
                content,
            },
        )
}

fn arb_transcript(max_len: usize) -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(arb_line(), 0..max_len)
}

fn render(lines: &[Line]) -> String {
    lines.iter().map(Line::render).collect::<Vec<_>>().join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every valid line yields exactly one record, in order
    #[test]
    fn every_valid_line_is_one_record(lines in arb_transcript(30)) {
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();

        prop_assert_eq!(records.len(), lines.len());
        for (record, line) in records.iter().zip(&lines) {
            prop_assert_eq!(record.sender(), line.sender.as_str());
            prop_assert_eq!(record.content(), line.content.as_str());
        }
    }

    /// Arbitrary input never panics
    #[test]
    fn parse_never_panics(input in any::<String>()) {
        let _ = TranscriptParser::new().parse_str(&input);
    }

    /// Continuation lines never produce records
    #[test]
    fn continuation_lines_are_dropped(lines in arb_transcript(10), extra in "[a-z ]{1,20}") {
        let with_noise: Vec<String> = lines
            .iter()
            .flat_map(|l| [l.render(), extra.clone()])
            .collect();
        let records = TranscriptParser::new().parse_str(&with_noise.join("\n")).unwrap();
        prop_assert_eq!(records.len(), lines.len());
    }

    /// Two- and four-digit years agree
    #[test]
    fn year_widths_agree(day in 1u32..=28, month in 1u32..=12, year in 0u32..=68) {
        let short = parse_whatsapp_timestamp(&format!("{}/{}/{:02}", day, month, year), "12:00:00");
        let long = parse_whatsapp_timestamp(&format!("{}/{}/{}", day, month, 2000 + year), "12:00:00");
        prop_assert!(short.is_some());
        prop_assert_eq!(short, long);
    }

    // ============================================
    // CLASSIFICATION PROPERTIES
    // ============================================

    /// Classification ignores case
    #[test]
    fn classification_ignores_case(
        marker in prop::sample::select(vec![
            "image omitted", "imagen omitida", "sticker omitted", "audio omitted",
            "video omitido", "document omitted", "hello world",
        ]),
        prefix in "[a-z ]{0,10}",
    ) {
        let body = format!("{}{}", prefix, marker);
        prop_assert_eq!(classify_content(&body), classify_content(&body.to_uppercase()));
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Every count view sums to the total
    #[test]
    fn views_sum_to_total(lines in arb_transcript(40)) {
        prop_assume!(!lines.is_empty());
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let result = analyze(&records).unwrap();
        let total = result.summary.total_messages;

        prop_assert_eq!(total, records.len());
        prop_assert_eq!(result.messages_per_participant.values().sum::<usize>(), total);
        prop_assert_eq!(result.messages_per_year.values().sum::<usize>(), total);
        prop_assert_eq!(result.messages_per_month.values().sum::<usize>(), total);
        prop_assert_eq!(result.messages_per_hour.values().sum::<usize>(), total);
        prop_assert_eq!(result.messages_per_weekday.values().sum::<usize>(), total);

        let kinds: usize = result
            .message_types_per_participant
            .values()
            .flat_map(|kinds| kinds.values())
            .sum();
        prop_assert_eq!(kinds, total);
    }

    /// Most active days are bounded, sorted and distinct
    #[test]
    fn most_active_days_shape(lines in arb_transcript(40), limit in 0usize..15) {
        prop_assume!(!lines.is_empty());
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let result = Analyzer::with_config(AnalysisConfig::new().with_most_active_days_limit(limit))
            .analyze(&records)
            .unwrap();

        let distinct: HashSet<String> = records.iter().map(|r| r.date_key()).collect();
        let days = &result.most_active_days;

        prop_assert_eq!(days.len(), limit.min(distinct.len()));
        prop_assert!(days.windows(2).all(|w| w[0].1 >= w[1].1));
        prop_assert!(days.iter().map(|(_, c)| c).sum::<usize>() <= records.len());
    }

    /// Averages cover every participant, word counts only text senders
    #[test]
    fn per_participant_coverage(lines in arb_transcript(40)) {
        prop_assume!(!lines.is_empty());
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let result = analyze(&records).unwrap();

        for participant in &result.summary.participants {
            prop_assert!(result.avg_message_length.contains_key(participant));

            let has_text = result.kind_count(participant, MessageKind::Text) > 0;
            prop_assert_eq!(result.word_counts.contains_key(participant), has_text);
            if !has_text {
                prop_assert_eq!(result.avg_message_length[participant], 0.0);
            }
        }
        prop_assert_eq!(result.avg_message_length.len(), result.summary.participants.len());
    }

    /// Duration is never negative
    #[test]
    fn duration_non_negative(lines in arb_transcript(40)) {
        prop_assume!(!lines.is_empty());
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let result = analyze(&records).unwrap();
        prop_assert!(result.summary.chat_duration_days >= 0);
        prop_assert!(result.summary.date_range.start <= result.summary.date_range.end);
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Filtering never adds records
    #[test]
    fn filter_never_increases(lines in arb_transcript(30)) {
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let len = records.len();
        let config = FilterConfig::new().with_user("Alice");
        prop_assert!(apply_filters(records, &config).len() <= len);
    }

    /// Inactive filter passes everything
    #[test]
    fn inactive_filter_is_identity(lines in arb_transcript(30)) {
        let records = TranscriptParser::new().parse_str(&render(&lines)).unwrap();
        let len = records.len();
        prop_assert_eq!(apply_filters(records, &FilterConfig::new()).len(), len);
    }
}
