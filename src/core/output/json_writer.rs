//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::OutputConfig;
use crate::error::ChatstatsError;

/// Serializes any report document to a JSON string.
///
/// Pretty output uses a two-space indent. Non-ASCII text is kept verbatim.
/// Works for both [`AnalysisResult`](crate::core::AnalysisResult) and
/// [`EmptyReport`](crate::core::EmptyReport).
pub fn to_json<T: Serialize + ?Sized>(
    report: &T,
    config: &OutputConfig,
) -> Result<String, ChatstatsError> {
    let json = if config.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Writes a report document to a JSON file, replacing any existing file.
///
/// The file ends with a newline.
pub fn write_json<T: Serialize + ?Sized>(
    report: &T,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatstatsError> {
    let json = to_json(report, config)?;
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
