//! Command-line interface wiring for onoma.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod dataset;
pub mod extract;
pub mod generate;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "PDF human-name extraction toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Extract(args) => extract::run(args, settings).await,
            Commands::Generate(args) => generate::run(args, settings).await,
            Commands::BuildDataset(args) => dataset::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract human names from the PDFs in the input folder.
    Extract(extract::Args),
    /// Generate synthetic labeled training data via the LLM.
    Generate(generate::Args),
    /// Re-align an existing raw synthetic record file into a dataset.
    BuildDataset(dataset::Args),
}

/// Which model family answers for each segment.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ParseMethod {
    /// Prompt the local LLM with the name-extraction template.
    Llm,
    /// Call the NER inference service with the name label set.
    Ner,
}

/// How a page is carved into segments.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReadMethod {
    /// Layout blocks, kept in original case.
    Paragraph,
    /// Sentence-terminal punctuation splits, lower-cased.
    Sentence,
}

/// Which NER checkpoint the inference service should load.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NerModel {
    /// The published general-purpose model.
    Base,
    /// The locally fine-tuned checkpoint.
    Tuned,
}

impl NerModel {
    /// Resolve the configured model identifier for this choice.
    pub fn model_id(&self, settings: &Settings) -> String {
        match self {
            Self::Base => settings.ner_base_model.clone(),
            Self::Tuned => settings.ner_tuned_model.clone(),
        }
    }
}
