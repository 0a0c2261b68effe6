//! Natural language processing orchestration layer.

pub mod align;
pub mod lexicon;
pub mod ner;
pub mod ollama;
pub mod synth;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use tracing::info;

use crate::{
    cli::{NerModel, ParseMethod, ReadMethod},
    config::Settings,
    data::pdf,
    text::segment::{self, SegmentConfig},
};

/// Pipeline selection for one extraction run.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    pub parser: ParseMethod,
    pub reader: ReadMethod,
    pub ner_model: NerModel,
}

/// What one segment went in as and what the model answered.
#[derive(Debug, Clone)]
pub struct SegmentOutput {
    pub input: String,
    /// Extracted names, one per line; empty when the segment had none.
    pub names: String,
}

/// Extraction results for one document.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outputs: Vec<SegmentOutput>,
}

/// Run the end-to-end name extraction pipeline over every PDF in the
/// configured input folder.
pub async fn extract_names(settings: &Settings, opts: ExtractOptions) -> Result<Vec<FileReport>> {
    let inputs = pdf::discover_pdfs(&settings.input_dir)?;
    if inputs.is_empty() {
        info!(dir = %settings.input_dir.display(), "no PDF inputs found");
        return Ok(Vec::new());
    }

    let backend = match opts.parser {
        ParseMethod::Llm => Backend::Llm(ollama::OllamaClient::new(
            settings,
            ollama::SamplingOptions::name_extraction(),
        )?),
        ParseMethod::Ner => Backend::Ner(ner::NerClient::new(settings, opts.ner_model)?),
    };

    let concurrency = 2usize;
    let reports = stream::iter(inputs)
        .map(|path| {
            let backend = backend.clone();
            let settings = settings.clone();
            let reader = opts.reader;
            async move {
                extract_file(&path, &settings, reader, &backend)
                    .await
                    .with_context(|| format!("extract names from {}", path.display()))
            }
        })
        .buffer_unordered(concurrency)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    Ok(reports)
}

#[derive(Debug, Clone)]
enum Backend {
    Llm(ollama::OllamaClient),
    Ner(ner::NerClient),
}

async fn extract_file(
    path: &Path,
    settings: &Settings,
    reader: ReadMethod,
    backend: &Backend,
) -> Result<FileReport> {
    let pages = pdf::extract_pages(path)?;
    let window = pdf::page_window(&pages, settings.skip_pages, settings.read_pages);

    let mut outputs = Vec::new();
    for page in window {
        let segments = match reader {
            ReadMethod::Paragraph => segment::segment_paragraphs(
                page.index,
                &pdf::blocks(&page.text),
                &SegmentConfig {
                    max_segments: settings.max_paragraphs,
                    min_words: settings.min_words,
                    lowercase: false,
                },
            ),
            ReadMethod::Sentence => segment::segment_sentences(
                page.index,
                &page.text,
                &SegmentConfig {
                    max_segments: settings.max_sentences,
                    min_words: settings.min_words,
                    lowercase: true,
                },
            ),
        };

        for seg in segments {
            let names = match backend {
                Backend::Llm(llm) => llm.extract_names(&seg.text).await?,
                Backend::Ner(ner) => ner
                    .predict(&seg.text)
                    .await?
                    .into_iter()
                    .map(|entity| entity.text)
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
            outputs.push(SegmentOutput {
                input: seg.text,
                names,
            });
        }
    }

    info!(path = %path.display(), segments = outputs.len(), "document processed");
    Ok(FileReport {
        path: path.to_path_buf(),
        outputs,
    })
}
