//! Natural-Language Target Lists
//!
//! Recognizes "a, b and c" style enumerations in free text and parses
//! channel-list phrases ("in #foo and on #bar") into normalized target
//! tokens that plugins can dispatch on.

pub mod channels;
pub mod pattern;

pub use channels::{parse_channel_list, ChannelToken, ConversationContext};
pub use pattern::{build_list_pattern, PatternError, CHANNEL_LIST, CHANNEL_NAME, NICK_LIST, NICK_NAME};
