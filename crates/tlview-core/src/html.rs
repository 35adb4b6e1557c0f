//! Trusted markup from the timeline endpoint
//!
//! `About` content is inserted as-is; the upstream source is assumed to
//! have sanitized it. Keeping it in its own type means any future
//! sanitization boundary has a single place to live.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw HTML that is trusted without sanitization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup received from a trusted source.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The raw markup, unchanged.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Render the markup to plain text for a character-cell display.
    ///
    /// Block-level tags and `<br>` become line breaks, every other tag is
    /// dropped, common entities are decoded, and runs of blank lines are
    /// collapsed. This is presentation only, not sanitization.
    pub fn to_plain_text(&self) -> String {
        let with_breaks = block_tag_re().replace_all(&self.0, "\n");
        let stripped = any_tag_re().replace_all(&with_breaks, "");
        let decoded = decode_entities(&stripped);

        let mut lines: Vec<&str> = Vec::new();
        for line in decoded.lines().map(str::trim) {
            if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
                continue;
            }
            lines.push(line);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

impl<'de> Deserialize<'de> for TrustedHtml {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::types::loose_string(deserializer).map(TrustedHtml)
    }
}

fn block_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<\s*(br\s*/?|/?\s*(p|div|h[1-6]|li|ul|ol|tr|table|section|blockquote))\b[^>]*>")
            .expect("valid block tag regex")
    })
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
