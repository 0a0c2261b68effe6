//! Align externally declared entity mentions onto token spans.
//!
//! Synthetic-data generators declare which entities a passage contains
//! (`{"text": ..., "entities": [{"entity": ..., "types": [...]}]}`); NER
//! training wants token-index spans. This module bridges the two: tokenize
//! the passage, slide each entity's token window across it, and emit one
//! span per matching window and category.

use serde::{
    de::Deserializer,
    ser::{SerializeTuple, Serializer},
    Deserialize, Serialize,
};
use thiserror::Error;
use tracing::warn;

use crate::text::tokenizer::{tokenize, Token};

/// An externally supplied (surface text, categories) pair to be located
/// within a segment. Not owned by this crate; arrives on the wire as
/// `{"entity": "...", "types": ["...", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    #[serde(rename = "entity")]
    pub text: String,
    pub types: Vec<String>,
}

/// A token-index range tagged with an entity category.
///
/// `start <= end`, both inclusive and valid within the paired token
/// sequence. Serialized as the 3-element array `[start, end, label]` used
/// by the synthetic-data and GLiNER training formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.start)?;
        tuple.serialize_element(&self.end)?;
        tuple.serialize_element(&self.label)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end, label) = <(usize, usize, String)>::deserialize(deserializer)?;
        Ok(Span { start, end, label })
    }
}

/// One NER training instance: token texts plus the spans found in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedExample {
    pub tokenized_text: Vec<String>,
    pub ner: Vec<Span>,
}

/// A synthetic-data record that failed to parse into the expected shape.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("record does not match the {{text, entities}} shape: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// Lower-case a category and replace underscores with spaces, matching the
/// synthetic-data vocabulary ("first_name" -> "first name").
pub fn normalize_category(raw: &str) -> String {
    raw.replace('_', " ").to_lowercase()
}

/// Find every contiguous token window matching an entity case-insensitively
/// and emit one span per window and category, in left-to-right discovery
/// order. No match for an entity is not an error; it simply contributes no
/// spans.
pub fn align(tokens: &[Token], entities: &[EntityMention]) -> Vec<Span> {
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let mut spans = Vec::new();
    for entity in entities {
        let needle = tokenize(&entity.text);
        if needle.is_empty() || needle.len() > texts.len() {
            continue;
        }
        let target = needle
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        for start in 0..=texts.len() - needle.len() {
            let window = texts[start..start + needle.len()].join(" ").to_lowercase();
            if window == target {
                for category in &entity.types {
                    spans.push(Span {
                        start,
                        end: start + needle.len() - 1,
                        label: normalize_category(category),
                    });
                }
            }
        }
    }
    spans
}

/// Parse one raw record and align its own declared entities.
pub fn annotate(record: &serde_json::Value) -> Result<AnnotatedExample, AlignError> {
    let record: SyntheticRecord = serde_json::from_value(record.clone())?;
    Ok(build_example(&record.text, &record.entities))
}

/// Parse one raw record but align a caller-supplied entity list instead of
/// the record's own. Used when the generator's declared entities are not
/// trusted and the caller already knows what was planted in the text.
pub fn annotate_with(
    record: &serde_json::Value,
    entities: &[EntityMention],
) -> Result<AnnotatedExample, AlignError> {
    let record: TextOnly = serde_json::from_value(record.clone())?;
    Ok(build_example(&record.text, entities))
}

fn build_example(text: &str, entities: &[EntityMention]) -> AnnotatedExample {
    let tokens = tokenize(text);
    let ner = align(&tokens, entities);
    AnnotatedExample {
        tokenized_text: tokens.into_iter().map(|t| t.text).collect(),
        ner,
    }
}

/// Outcome of aligning a batch of raw records.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub examples: Vec<AnnotatedExample>,
    /// Records skipped because they did not parse. Surfaced for logging;
    /// a malformed record never aborts the batch or corrupts its peers.
    pub skipped: usize,
}

/// Align every record in a batch, skipping and counting malformed entries.
pub fn align_batch(records: &[serde_json::Value]) -> BatchReport {
    let mut report = BatchReport::default();
    for record in records {
        match annotate(record) {
            Ok(example) => report.examples.push(example),
            Err(err) => {
                warn!(error = %err, "skipping malformed record");
                report.skipped += 1;
            }
        }
    }
    report
}

#[derive(Debug, Deserialize)]
struct SyntheticRecord {
    text: String,
    entities: Vec<EntityMention>,
}

#[derive(Debug, Deserialize)]
struct TextOnly {
    text: String,
}
