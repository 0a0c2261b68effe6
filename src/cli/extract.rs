//! CLI entry-point for name extraction over PDF inputs.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    cli::{NerModel, ParseMethod, ReadMethod},
    config::Settings,
    nlp::{self, ExtractOptions},
};

/// Args for the `extract` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Extraction backend.
    #[arg(long, value_enum)]
    pub parser: ParseMethod,
    /// Page segmentation mode.
    #[arg(long, value_enum)]
    pub reader: ReadMethod,
    /// NER checkpoint (only used with `--parser ner`).
    #[arg(long, value_enum, default_value = "base")]
    pub ner_model: NerModel,
    /// Override the configured input folder.
    #[arg(long)]
    pub input: Option<std::path::PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, mut settings: Settings) -> Result<()> {
    if let Some(input) = args.input {
        settings.input_dir = input;
    }
    let opts = ExtractOptions {
        parser: args.parser,
        reader: args.reader,
        ner_model: args.ner_model,
    };

    let reports = nlp::extract_names(&settings, opts).await?;
    for report in reports {
        println!("# {}", report.path.display());
        for output in report.outputs {
            println!("input text: {}", output.input);
            println!("output text:\n{}", output.names);
            println!("--");
        }
    }
    Ok(())
}
