//! Transcript parsing building blocks.
//!
//! - [`whatsapp`] - the line grammar, mark stripping and timestamp parsing
//! - [`classify`] - content-type classification of message bodies
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) combines them.

pub mod classify;
pub mod whatsapp;

pub use classify::{KIND_MARKERS, classify_content};
pub use whatsapp::{LINE_PATTERN, YearFormat, clean_line, parse_whatsapp_timestamp};
