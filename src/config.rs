//! Runtime configuration utilities for onoma.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the Ollama server.
    pub ollama_url: String,
    /// Ollama model used for name extraction and synthetic generation.
    pub ollama_model: String,
    /// Base URL of the GLiNER inference service.
    pub ner_url: String,
    /// Identifier of the published base NER model.
    pub ner_base_model: String,
    /// Identifier of the locally fine-tuned NER checkpoint.
    pub ner_tuned_model: String,
    /// Minimum entity confidence accepted from the NER service.
    pub ner_threshold: f64,
    /// Folder scanned for input PDF documents.
    pub input_dir: PathBuf,
    /// Root folder for generated datasets.
    pub data_dir: PathBuf,
    /// Leading pages ignored in every document (covers, tables of contents).
    pub skip_pages: usize,
    /// Pages read per document after the skipped prefix.
    pub read_pages: usize,
    /// Paragraph segments accepted per page.
    pub max_paragraphs: usize,
    /// Sentence segments accepted per page.
    pub max_sentences: usize,
    /// Segments shorter than this many words are discarded.
    pub min_words: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let ollama_url =
            env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());
        let ollama_model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "gemma2".to_string());
        let ner_url = env::var("NER_URL").unwrap_or_else(|_| "http://localhost:9090".to_string());
        let ner_base_model = env::var("NER_BASE_MODEL")
            .unwrap_or_else(|_| "urchade/gliner_medium-v2.1".to_string());
        let ner_tuned_model =
            env::var("NER_TUNED_MODEL").unwrap_or_else(|_| "models/checkpoint-510".to_string());
        let ner_threshold = env_parse("NER_THRESHOLD", 0.5);
        let input_dir = env::var("INPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./input"));
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let skip_pages = env_parse("SKIP_PAGES", 2);
        let read_pages = env_parse("READ_PAGES", 2);
        let max_paragraphs = env_parse("MAX_PARAGRAPHS", 3);
        let max_sentences = env_parse("MAX_SENTENCES", 10);
        let min_words = env_parse("MIN_WORDS", 3);

        std::fs::create_dir_all(&input_dir).context("creating input dir")?;
        std::fs::create_dir_all(&data_dir).context("creating data dir")?;

        Ok(Self {
            ollama_url,
            ollama_model,
            ner_url,
            ner_base_model,
            ner_tuned_model,
            ner_threshold,
            input_dir,
            data_dir,
            skip_pages,
            read_pages,
            max_paragraphs,
            max_sentences,
            min_words,
        })
    }

    /// Convenience helper for derived dataset path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
