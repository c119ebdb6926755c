use serde::{Deserialize, Serialize};

use crate::extractor::classifier::WebsiteCategory;

pub const MAX_HEADINGS_PER_LEVEL: usize = 2;
pub const MAX_PARAGRAPHS: usize = 3;
pub const MIN_PARAGRAPH_CHARS: usize = 50;
pub const MAX_NAV_LINKS: usize = 5;
pub const MAX_COLOR_SIGNALS: usize = 5;
pub const MAX_TYPE_ELEMENTS: usize = 3;
pub const MAX_SUMMARY_SENTENCES: usize = 3;
pub const CONTENT_SAMPLE_CHARS: usize = 1500;

/// Distinct class tokens / inline styles that hint at colour usage, in
/// first-seen order.
pub type ColorSignals = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDigest {
    pub headings: Vec<String>,
    pub main_content: Vec<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpecificInfo {
    pub category: WebsiteCategory,
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub summary_sentences: Vec<String>,
    pub category: WebsiteCategory,
    pub colors: ColorSignals,
    pub content: ContentDigest,
    pub type_specific: TypeSpecificInfo,
}

/// Collapse every whitespace run (newlines included) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
