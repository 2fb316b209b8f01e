//! Content-type classification from attachment placeholders.
//!
//! Exports do not include attachments; they leave a placeholder such as
//! `image omitted` (English) or `imagen omitida` (Spanish) in the body.

use crate::message::MessageKind;

/// Placeholder markers, checked in order. The first match wins.
///
/// New markers must be appended in a position that keeps this order
/// meaningful: a body containing both an image and a sticker marker is an
/// image.
pub const KIND_MARKERS: &[(&str, MessageKind)] = &[
    ("imagen omitida", MessageKind::Image),
    ("image omitted", MessageKind::Image),
    ("sticker omitido", MessageKind::Sticker),
    ("sticker omitted", MessageKind::Sticker),
    ("audio omitido", MessageKind::Audio),
    ("audio omitted", MessageKind::Audio),
    ("video omitido", MessageKind::Video),
    ("video omitted", MessageKind::Video),
    ("documento omitido", MessageKind::Document),
    ("document omitted", MessageKind::Document),
];

/// Classifies a message body by case-insensitive substring search over
/// [`KIND_MARKERS`]. Bodies without a marker are [`MessageKind::Text`].
pub fn classify_content(content: &str) -> MessageKind {
    let lower = content.to_lowercase();
    KIND_MARKERS
        .iter()
        .find(|(marker, _)| lower.contains(marker))
        .map(|&(_, kind)| kind)
        .unwrap_or(MessageKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_markers() {
        assert_eq!(classify_content("image omitted"), MessageKind::Image);
        assert_eq!(classify_content("sticker omitted"), MessageKind::Sticker);
        assert_eq!(classify_content("audio omitted"), MessageKind::Audio);
        assert_eq!(classify_content("video omitted"), MessageKind::Video);
        assert_eq!(classify_content("document omitted"), MessageKind::Document);
    }

    #[test]
    fn test_spanish_markers() {
        assert_eq!(classify_content("imagen omitida"), MessageKind::Image);
        assert_eq!(classify_content("sticker omitido"), MessageKind::Sticker);
        assert_eq!(classify_content("audio omitido"), MessageKind::Audio);
        assert_eq!(classify_content("video omitido"), MessageKind::Video);
        assert_eq!(classify_content("documento omitido"), MessageKind::Document);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_content("IMAGE OMITTED"), MessageKind::Image);
        assert_eq!(classify_content("Audio Omitido"), MessageKind::Audio);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(
            classify_content("report.pdf • 3 pages document omitted"),
            MessageKind::Document
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            classify_content("video omitted, image omitted"),
            MessageKind::Image
        );
        assert_eq!(
            classify_content("document omitted and sticker omitted"),
            MessageKind::Sticker
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(classify_content("Hello there"), MessageKind::Text);
        assert_eq!(classify_content("<Media omitted>"), MessageKind::Text);
        assert_eq!(classify_content(""), MessageKind::Text);
    }
}
