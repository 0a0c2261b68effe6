//! Synthetic training-data generation.
//!
//! For each steering phrase and sample, plant a random (first name,
//! surname) pair in a generation prompt, ask the LLM for a JSON passage,
//! and align the planted names back onto token spans. The model's own
//! entity annotations are inconsistent, so alignment always runs against
//! the pair the prompt planted, not what the model declared.

use std::path::PathBuf;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

use crate::{
    config::Settings,
    data::dataset,
    nlp::{
        align::{self, BatchReport, EntityMention},
        lexicon,
        ollama::{OllamaClient, SamplingOptions},
    },
};

/// Schema-constrained instruction block; the model completes the final
/// `<start ...>` tag with a JSON object and stops at `<end>`.
pub const GENERATION_PROMPT: &str = r#"
    **Objective:**
    Generate realistic text passages that include named entities. Each entity should be clearly identified and labeled with its type(s) for easy extraction.

    **Format Requirements:**
    - Output should be formatted in JSON and include both the text and a list of entities.
    - No additional comments or explanations should be included in the output.
    - Each entity must be accurately labeled and appear in the entities list.
    - Follow all attribute requirements exactly as specified.
    - Output only the JSON object.

    **Entity Annotation Details:**
    - All entity types must be in lowercase. For example, use "type" instead of "TYPE".
    - Entity types can contain multiple words, separated by spaces (e.g., "entity type", not "entity_type").
    - Nested entities are allowed (an entity can be within another entity).
    - An entity can be associated with multiple types. In such cases, list them under the "types" key.

    **Output Schema Example:**
    <start attribute_1="value1" attribute_2="value2" ...>
    {
    "text": "text content",
    "entities": [
        {"entity": "entity name", "types": ["type 1", "type 2", ...]},
        ...
    ]
    }
    <end>

    **Finish the following Schema:**"#;

/// Render the generation prompt with a `<start>` tag carrying the given
/// attributes. Attributes valued "n/a" are omitted.
pub fn generation_prompt(attributes: &[(&str, &str)]) -> String {
    let rendered = attributes
        .iter()
        .filter(|(_, value)| *value != "n/a")
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{GENERATION_PROMPT}\n    <start {rendered}>")
}

/// Knobs for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Samples requested per steering phrase.
    pub samples: usize,
    /// Also steer each passage towards a random country.
    pub with_country: bool,
    /// Fixed RNG seed for reproducible name sampling.
    pub seed: Option<u64>,
}

/// Generate a dataset and persist it under the configured data folder.
///
/// Responses that are not valid JSON, or that lack the expected `text`
/// field, are skipped and counted; the run never aborts on one bad sample.
pub async fn generate_dataset(settings: &Settings, opts: GenerateOptions) -> Result<PathBuf> {
    let llm = OllamaClient::new(settings, SamplingOptions::synthetic_data())?;
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut report = BatchReport::default();
    for &text_type in lexicon::TEXT_TYPES {
        for _ in 0..opts.samples {
            let name = lexicon::pick(&mut rng, lexicon::FIRST_NAMES);
            let surname = lexicon::pick(&mut rng, lexicon::LAST_NAMES);
            let country = if opts.with_country {
                lexicon::pick(&mut rng, lexicon::COUNTRIES)
            } else {
                "n/a"
            };
            let prompt = generation_prompt(&[
                ("language", "english"),
                ("types_of_text", text_type),
                ("name", name),
                ("surname", surname),
                ("country", country),
            ]);

            let raw = llm.generate(&prompt).await?;
            let record: serde_json::Value = match serde_json::from_str(raw.trim()) {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, "skipping non-JSON generation");
                    report.skipped += 1;
                    continue;
                }
            };

            let planted = planted_entities(name, surname);
            match align::annotate_with(&record, &planted) {
                Ok(example) => report.examples.push(example),
                Err(err) => {
                    warn!(error = %err, "skipping malformed generation");
                    report.skipped += 1;
                }
            }
        }
    }

    info!(
        examples = report.examples.len(),
        skipped = report.skipped,
        "synthetic generation finished"
    );
    dataset::persist_examples(&report.examples, settings)
}

/// The entity list alignment runs against: the planted pair, categorised
/// the way the NER label set expects.
fn planted_entities(name: &str, surname: &str) -> Vec<EntityMention> {
    vec![
        EntityMention {
            text: name.to_string(),
            types: vec!["first_name".to_string()],
        },
        EntityMention {
            text: surname.to_string(),
            types: vec!["last_name".to_string()],
        },
    ]
}
