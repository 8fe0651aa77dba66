//! Markup-to-text normalization pipeline.
//!
//! A fixed sequence of pattern substitutions: scripted/styled blocks go
//! first, inline formatting tags become control codes, anchors are
//! rendered according to the configured policy, structure tags collapse
//! to spaces, leftovers are stripped, entities are decoded, and the
//! result is squeezed onto a single line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::entities::decode_entities;
use crate::Format;

/// How anchor elements are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkPolicy {
    /// No anchor-specific handling; the generic tag strip keeps the
    /// anchor text and drops the target.
    #[default]
    Keep,
    /// Explicit spelling of the default rendering.
    Strip,
    /// Wrap the anchor text in reverse-video codes.
    Reverse,
    /// Wrap the anchor text in bold codes.
    Bold,
    /// Wrap the anchor text in underline codes.
    Underline,
    /// Render the whole element as `text: url`.
    EmitInline,
}

impl LinkPolicy {
    /// Maps a config string to a policy.
    ///
    /// Unknown values are reported and fall back to the default instead
    /// of failing the caller.
    pub fn parse_lenient(value: &str) -> LinkPolicy {
        match value.to_ascii_lowercase().as_str() {
            "keep" => LinkPolicy::Keep,
            "strip" => LinkPolicy::Strip,
            "reverse" => LinkPolicy::Reverse,
            "bold" => LinkPolicy::Bold,
            "underline" => LinkPolicy::Underline,
            "emitinline" | "emit_inline" => LinkPolicy::EmitInline,
            other => {
                warn!(policy = other, "unknown link policy, leaving anchors as plain text");
                LinkPolicy::Keep
            }
        }
    }

    /// The wrapping format for marker-based policies.
    fn wrap_format(self) -> Option<Format> {
        match self {
            LinkPolicy::Reverse => Some(Format::Reverse),
            LinkPolicy::Bold => Some(Format::Bold),
            LinkPolicy::Underline => Some(Format::Underline),
            _ => None,
        }
    }
}

/// Options for [`normalize`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizeOptions {
    pub link_policy: LinkPolicy,
}

// --- Pipeline patterns ---

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").unwrap());
static BOLD_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:b|strong)\s*>").unwrap());
static UNDERLINE_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:i|em|u)\s*>").unwrap());
static ANCHOR_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<a\b[^>]*>|</a\s*>").unwrap());
static ANCHOR_INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*\bhref\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))[^>]*>(.*?)</a\s*>"#)
        .unwrap()
});
static BREAK_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?p\b[^>]*>|<br\b[^>]*>").unwrap());
static SUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<sup\s*>(.*?)</sup\s*>").unwrap());
static SUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<sub\s*>(.*?)</sub\s*>").unwrap());
static BRACED_SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\^_])\{(.)\}").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static DUP_BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x02(\s*)\x02").unwrap());
static DUP_UNDERLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1f(\s*)\x1f").unwrap());
static MARKER_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([\x02\x16\x1f])\s*").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a restricted-markup string into one line of plain text
/// with inline formatting codes.
pub fn normalize(input: &str, options: &NormalizeOptions) -> String {
    let mut text = SCRIPT_RE.replace_all(input, "").into_owned();
    text = STYLE_RE.replace_all(&text, "").into_owned();

    text = BOLD_TAG_RE
        .replace_all(&text, Format::Bold.marker())
        .into_owned();
    text = UNDERLINE_TAG_RE
        .replace_all(&text, Format::Underline.marker())
        .into_owned();

    if let Some(format) = options.link_policy.wrap_format() {
        text = ANCHOR_TAG_RE.replace_all(&text, format.marker()).into_owned();
    } else if options.link_policy == LinkPolicy::EmitInline {
        text = ANCHOR_INLINE_RE
            .replace_all(&text, |caps: &Captures| {
                let href = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .or_else(|| caps.get(3))
                    .map_or("", |m| m.as_str());
                let inner = caps.get(4).map_or("", |m| m.as_str());
                format!("{inner}: {href}")
            })
            .into_owned();
    }

    text = BREAK_TAG_RE.replace_all(&text, " ").into_owned();
    text = text.replace('\n', " ").replace('\r', " ");

    text = SUP_RE.replace_all(&text, "^{${1}}").into_owned();
    text = SUB_RE.replace_all(&text, "_{${1}}").into_owned();
    text = BRACED_SINGLE_RE.replace_all(&text, "${1}${2}").into_owned();

    text = TAG_RE.replace_all(&text, "").into_owned();
    text = decode_entities(&text);

    // Adjacent open+close tags leave empty formatting spans; drop them.
    text = DUP_BOLD_RE.replace_all(&text, "${1}").into_owned();
    text = DUP_UNDERLINE_RE.replace_all(&text, "${1}").into_owned();

    // A marker absorbs the whitespace run around it. At the string
    // boundaries the whitespace disappears outright.
    let len = text.len();
    text = MARKER_WS_RE
        .replace_all(&text, |caps: &Captures| {
            let whole = caps.get(0).unwrap();
            let marker = &caps[1];
            if whole.start() == 0 || whole.end() == len {
                marker.to_string()
            } else {
                format!(" {marker}")
            }
        })
        .into_owned();

    text = WS_RE.replace_all(&text, " ").into_owned();
    text.trim().to_string()
}

/// Normalizes `text` in place, reporting whether the value actually
/// changed.
pub fn normalize_in_place(text: &mut String, options: &NormalizeOptions) -> bool {
    let normalized = normalize(text, options);
    if normalized == *text {
        false
    } else {
        *text = normalized;
        true
    }
}
