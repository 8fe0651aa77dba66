//! Process-wide pattern tables and composite list-pattern construction.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors from composite pattern construction.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid list pattern fragment: {0}")]
    Pattern(#[from] regex::Error),
}

/// Channel-name token for IRC-style transports (`#chan`, `&local`,
/// `+modeless`, `!safe`).
pub static CHANNEL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#&+!][^\s,]+").unwrap());

/// Nickname token.
pub static NICK_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_\[\]{}^`|\\][A-Za-z0-9_\[\]{}^`|\\-]*").unwrap());

/// Whole channel enumeration: "#a, #b and on #c".
pub static CHANNEL_LIST: Lazy<Regex> =
    Lazy::new(|| build_list_pattern(CHANNEL_NAME.as_str(), "in|on").unwrap());

/// Whole nickname enumeration: "alice, bob and carol".
pub static NICK_LIST: Lazy<Regex> =
    Lazy::new(|| build_list_pattern(NICK_NAME.as_str(), "").unwrap());

/// Builds a pattern matching one-or-more repetitions of `item`.
///
/// Repetitions are separated by an optional comma, an optional "and",
/// and whitespace. When `prefix` is non-empty, repetitions after the
/// first may also carry the prefix token ("in #a and in #b").
pub fn build_list_pattern(item: &str, prefix: &str) -> Result<Regex, PatternError> {
    let lead = if prefix.is_empty() {
        String::new()
    } else {
        format!(r"(?:(?:{prefix})\s+)?")
    };
    let source = format!(r"(?:{item})(?:,?(?:\s+and)?\s+{lead}(?:{item}))*");
    Ok(Regex::new(&source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_match(re: &Regex, text: &str) -> bool {
        re.find(text).is_some_and(|m| m.as_str() == text)
    }

    #[test]
    fn channel_name_accepts_irc_sigils() {
        for name in ["#rust", "&local", "+chat", "!safe"] {
            assert!(full_match(&CHANNEL_NAME, name), "{name}");
        }
        assert!(!CHANNEL_NAME.is_match("rust"));
    }

    #[test]
    fn list_pattern_matches_comma_and_forms() {
        let re = build_list_pattern("[a-z]+", "").unwrap();
        for text in ["apple", "apple, pear", "apple and pear", "apple, pear and plum"] {
            assert!(full_match(&re, text), "{text}");
        }
    }

    #[test]
    fn list_pattern_accepts_prefix_on_later_items() {
        let re = build_list_pattern("#[a-z]+", "in|on").unwrap();
        assert!(full_match(&re, "#a, in #b and on #c"));
        assert!(full_match(&re, "#a #b"));
    }

    #[test]
    fn invalid_item_fragment_is_an_error() {
        assert!(matches!(
            build_list_pattern("(", ""),
            Err(PatternError::Pattern(_))
        ));
    }

    #[test]
    fn prebuilt_channel_list_matches() {
        assert!(full_match(&CHANNEL_LIST, "#a, #b and on #c"));
    }

    #[test]
    fn prebuilt_nick_list_matches() {
        assert!(full_match(&NICK_LIST, "alice, bob and carol"));
        assert!(full_match(&NICK_LIST, "[away]guy and pipe|nick"));
    }
}
