//! Page segmentation: split a page into bounded, cleaned paragraph or
//! sentence chunks ready for a model call.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A cleaned unit of page text passed to a name-extraction collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-based page the segment came from.
    pub page: usize,
    /// Index of the source block or sentence on that page, before filtering.
    pub index: usize,
    /// Whitespace-collapsed text.
    pub text: String,
    /// Number of whitespace-separated words in `text`.
    pub word_count: usize,
}

/// Bounds applied while accepting segments from one page.
#[derive(Debug, Clone, Copy)]
pub struct SegmentConfig {
    /// Exact cap on accepted segments per page. Zero accepts nothing.
    ///
    /// The original scripts decremented a counter before comparing, letting
    /// one extra segment through past the nominal quota; this implementation
    /// treats the quota as exact.
    pub max_segments: usize,
    /// Candidates with fewer words than this are discarded.
    pub min_words: usize,
    /// Lower-case the cleaned text (sentence-mode caller policy).
    pub lowercase: bool,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            max_segments: usize::MAX,
            min_words: 3,
            lowercase: false,
        }
    }
}

/// Sentence-like runs terminated by `.`, `!` or `?`, keeping the terminator.
static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]*[.!?]").expect("valid regex"));

/// Collapse line breaks and repeated spaces into single spaces and trim.
pub fn clean(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accept cleaned segments from pre-delimited paragraph blocks.
///
/// Blocks under `min_words` words are dropped; iteration stops once
/// `max_segments` blocks have been accepted. Never fails: a page with no
/// usable blocks yields an empty sequence.
pub fn segment_paragraphs(page: usize, blocks: &[String], config: &SegmentConfig) -> Vec<Segment> {
    collect_segments(page, blocks.iter().map(String::as_str), config)
}

/// Split a page's full text on sentence-terminal punctuation and accept
/// cleaned sentences under the same bounds as paragraph mode.
pub fn segment_sentences(page: usize, text: &str, config: &SegmentConfig) -> Vec<Segment> {
    collect_segments(
        page,
        SENTENCE_PATTERN.find_iter(text).map(|m| m.as_str()),
        config,
    )
}

fn collect_segments<'a, I>(page: usize, candidates: I, config: &SegmentConfig) -> Vec<Segment>
where
    I: Iterator<Item = &'a str>,
{
    let mut segments = Vec::new();
    for (index, candidate) in candidates.enumerate() {
        if segments.len() >= config.max_segments {
            break;
        }
        let mut text = clean(candidate);
        if config.lowercase {
            text = text.to_lowercase();
        }
        let word_count = text.split_whitespace().count();
        if word_count < config.min_words {
            continue;
        }
        segments.push(Segment {
            page,
            index,
            text,
            word_count,
        });
    }
    segments
}
