//! Channel-list parsing into normalized target tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pattern::CHANNEL_NAME;

/// One parsed element of a channel enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelToken {
    /// A literal channel name ("#rust").
    Channel(String),
    /// Every reachable target ("anywhere" / "everywhere").
    AnyTarget,
    /// A target that cannot be named: private messages, or "here" said
    /// outside any channel.
    UnknownTarget,
}

/// The conversation a piece of text was received in.
///
/// Supplied by the caller so that "here" can resolve to the enclosing
/// channel. `None` means the conversation has no channel name (a
/// private message, a console session).
pub trait ConversationContext {
    fn channel_name(&self) -> Option<String>;
}

impl<'a> ConversationContext for Option<&'a str> {
    fn channel_name(&self) -> Option<String> {
        self.map(str::to_string)
    }
}

// Item shape: a list boundary, an optional "in"/"on", then a channel
// name or one of the special words.
static CHANNEL_ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    let source = format!(
        r"(?:^|,|\band\b|\s)\s*(?:(?:in|on)\s+)?({}|(?:here|private|pvt)\b)",
        CHANNEL_NAME.as_str()
    );
    Regex::new(&source).unwrap()
});

/// Parses a channel enumeration ("in #foo and on #bar") into target
/// tokens, deduplicated in first-occurrence order.
///
/// The literal inputs "anywhere" and "everywhere" stand for every
/// reachable target.
pub fn parse_channel_list(text: &str, context: &dyn ConversationContext) -> Vec<ChannelToken> {
    if text == "anywhere" || text == "everywhere" {
        return vec![ChannelToken::AnyTarget];
    }

    let mut tokens = Vec::new();
    for caps in CHANNEL_ITEM_RE.captures_iter(text) {
        let token = match &caps[1] {
            "private" | "pvt" => ChannelToken::UnknownTarget,
            "here" => match context.channel_name() {
                Some(name) => ChannelToken::Channel(name),
                None => ChannelToken::UnknownTarget,
            },
            name => ChannelToken::Channel(name.to_string()),
        };
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    debug!(input = text, count = tokens.len(), "parsed channel list");
    tokens
}
