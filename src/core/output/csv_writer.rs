//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::AnalysisResult;
use crate::error::ChatstatsError;
use crate::message::MessageKind;

/// Fixed column order of the participant table.
pub const CSV_HEADER: [&str; 10] = [
    "Participant",
    "Messages",
    "Text",
    "Image",
    "Sticker",
    "Audio",
    "Video",
    "Document",
    "Words",
    "AvgLength",
];

/// Writes the per-participant table to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`CSV_HEADER`]; one row per participant in order of first
///   appearance
/// - `AvgLength` has two decimals
/// - Encoding: UTF-8
pub fn write_csv(
    result: &AnalysisResult,
    output_path: impl AsRef<Path>,
) -> Result<(), ChatstatsError> {
    let file = File::create(output_path)?;
    write_table(result, file)
}

/// Renders the per-participant table as a string.
///
/// Same format as [`write_csv`].
pub fn to_csv(result: &AnalysisResult) -> Result<String, ChatstatsError> {
    let mut buffer = Vec::new();
    write_table(result, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_table<W: Write>(result: &AnalysisResult, sink: W) -> Result<(), ChatstatsError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for participant in result.participants() {
        writer.write_record(build_row(result, participant))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(result: &AnalysisResult, participant: &str) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_HEADER.len());

    row.push(participant.to_string());
    row.push(
        result
            .messages_per_participant
            .get(participant)
            .copied()
            .unwrap_or(0)
            .to_string(),
    );
    for kind in MessageKind::all() {
        row.push(result.kind_count(participant, *kind).to_string());
    }
    row.push(
        result
            .word_counts
            .get(participant)
            .copied()
            .unwrap_or(0)
            .to_string(),
    );
    row.push(format!(
        "{:.2}",
        result
            .avg_message_length
            .get(participant)
            .copied()
            .unwrap_or(0.0)
    ));

    row
}
