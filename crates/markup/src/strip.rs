//! Strict tag stripping.
//!
//! The blunt variant of the normalizer: no formatting codes, no
//! whitespace squeeze. Tags go, a fixed handful of entities decode,
//! newlines go.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Removes every tag, decodes the entities that matter for display, and
/// drops literal newlines.
pub fn rip_tags(input: &str) -> String {
    TAG_RE
        .replace_all(input, "")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&ellip;", "\u{2026}")
        .replace("&apos;", "'")
        .replace('\n', "")
        .replace('\r', "")
}
