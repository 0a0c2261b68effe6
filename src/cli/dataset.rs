//! CLI entry-point for re-aligning raw synthetic records into a dataset.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{config::Settings, data::dataset, nlp::align};

/// Args for the `build-dataset` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSON array of raw `{text, entities}` records.
    #[arg(long)]
    pub input: PathBuf,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let records = dataset::load_records(&args.input)?;
    let report = align::align_batch(&records);
    info!(
        examples = report.examples.len(),
        skipped = report.skipped,
        "aligned raw records"
    );
    let path = dataset::persist_examples(&report.examples, &settings)?;
    println!("{}", path.display());
    Ok(())
}
