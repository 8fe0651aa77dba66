//! HTML/XML character entity decoding.
//!
//! Handles the named entities that actually show up in feeds and page
//! titles, plus decimal and hex numeric references. Anything unknown is
//! left in place rather than mangled.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Named entities and their literal replacements.
///
/// `&nbsp;` becomes a plain space: the output always ends up on a chat
/// transport where a non-breaking space is just a second kind of blank.
static NAMED_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("amp", "&"),
    ("quot", "\""),
    ("lt", "<"),
    ("gt", ">"),
    ("apos", "'"),
    ("ellip", "\u{2026}"),
    ("hellip", "\u{2026}"),
    ("mdash", "\u{2014}"),
    ("ndash", "\u{2013}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201c}"),
    ("rdquo", "\u{201d}"),
    ("laquo", "\u{ab}"),
    ("raquo", "\u{bb}"),
    ("copy", "\u{a9}"),
    ("reg", "\u{ae}"),
    ("trade", "\u{2122}"),
    ("deg", "\u{b0}"),
    ("middot", "\u{b7}"),
    ("times", "\u{d7}"),
    ("divide", "\u{f7}"),
    ("plusmn", "\u{b1}"),
    ("cent", "\u{a2}"),
    ("pound", "\u{a3}"),
    ("euro", "\u{20ac}"),
];

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(?:#([xX]?)([0-9a-fA-F]+)|([A-Za-z]+));").unwrap());

/// Decodes character entities to their literal characters.
///
/// Single pass: the output of one replacement is never rescanned, so
/// `&amp;lt;` decodes to `&lt;` and stops there.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            if let Some(name) = caps.get(3) {
                return NAMED_ENTITIES
                    .iter()
                    .find(|(n, _)| *n == name.as_str())
                    .map(|(_, lit)| (*lit).to_string())
                    .unwrap_or_else(|| caps[0].to_string());
            }
            let radix = if caps[1].is_empty() { 10 } else { 16 };
            u32::from_str_radix(&caps[2], radix)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
