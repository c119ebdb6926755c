//! Positional text summary: the first few sentences of the page.
//!
//! Sentence boundaries come from a pluggable [`SentenceSegmenter`]. When no
//! segmenter is available the summarizer falls back to splitting on literal
//! periods. The two strategies can disagree around abbreviations such as
//! "Dr. Smith"; that difference is accepted.

use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::extractor::model::MAX_SUMMARY_SENTENCES;

#[derive(Error, Debug)]
#[error("sentence segmentation unavailable: {0}")]
pub struct SegmentationUnavailable(pub String);

pub trait SentenceSegmenter: Send + Sync {
    /// Sentences in document order, trimmed and non-empty.
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationUnavailable>;
}

/// Unicode (UAX #29) sentence boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentationUnavailable> {
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Which sentence strategy the service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmenterKind {
    #[default]
    Unicode,
    /// No segmentation resource; always use the period fallback.
    Period,
}

impl FromStr for SegmenterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "period" => Ok(Self::Period),
            other => Err(format!("unknown sentence segmenter '{}'", other)),
        }
    }
}

#[derive(Clone)]
pub struct Summarizer {
    segmenter: Option<Arc<dyn SentenceSegmenter>>,
    max_sentences: usize,
}

impl Summarizer {
    pub fn new(segmenter: Option<Arc<dyn SentenceSegmenter>>) -> Self {
        Self {
            segmenter,
            max_sentences: MAX_SUMMARY_SENTENCES,
        }
    }

    pub fn from_kind(kind: SegmenterKind) -> Self {
        match kind {
            SegmenterKind::Unicode => Self::new(Some(Arc::new(UnicodeSentenceSegmenter))),
            SegmenterKind::Period => Self::new(None),
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    pub fn summarize(&self, text: &str) -> Vec<String> {
        if let Some(segmenter) = &self.segmenter {
            match segmenter.segment(text) {
                Ok(mut sentences) => {
                    sentences.truncate(self.max_sentences);
                    return sentences;
                }
                Err(err) => tracing::warn!("{}, splitting on periods instead", err),
            }
        }

        split_on_periods(text, self.max_sentences)
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::from_kind(SegmenterKind::default())
    }
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("segmented", &self.segmenter.is_some())
            .field("max_sentences", &self.max_sentences)
            .finish()
    }
}

fn split_on_periods(text: &str, max_sentences: usize) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .take(max_sentences)
        .map(|fragment| format!("{}.", fragment))
        .collect()
}
