//! Restricted-Markup Normalizer
//!
//! Converts the HTML subset found in feed titles, search results, and
//! scraped pages into a single line of plain text carrying inline chat
//! formatting codes, or strips markup entirely. Shared by every warble
//! plugin that relays web content into a conversation.

use serde::{Deserialize, Serialize};

pub mod entities;
pub mod normalize;
pub mod strip;

pub use entities::decode_entities;
pub use normalize::{normalize, normalize_in_place, LinkPolicy, NormalizeOptions};
pub use strip::rip_tags;

/// Bold control code understood by IRC-style transports.
pub const BOLD: &str = "\u{02}";
/// Underline control code.
pub const UNDERLINE: &str = "\u{1f}";
/// Reverse-video control code.
pub const REVERSE: &str = "\u{16}";

/// Inline formatting kinds, each bound to its transport control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Bold,
    Underline,
    Reverse,
}

impl Format {
    /// The one-character marker emitted for this format.
    pub fn marker(self) -> &'static str {
        match self {
            Format::Bold => BOLD,
            Format::Underline => UNDERLINE,
            Format::Reverse => REVERSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_single_control_characters() {
        for format in [Format::Bold, Format::Underline, Format::Reverse] {
            let marker = format.marker();
            assert_eq!(marker.chars().count(), 1);
            assert!(marker.chars().next().unwrap().is_control());
        }
    }

    #[test]
    fn format_serializes_camel_case() {
        assert_eq!(serde_json::to_string(&Format::Bold).unwrap(), "\"bold\"");
        assert_eq!(
            serde_json::to_string(&Format::Underline).unwrap(),
            "\"underline\""
        );
    }
}
