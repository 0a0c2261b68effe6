//! CLI entry-point for synthetic training-data generation.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp::synth};

/// Args for the `generate` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Samples generated per steering phrase.
    #[arg(long, default_value_t = 10)]
    pub samples: usize,
    /// Steer each passage towards a random country.
    #[arg(long)]
    pub country: bool,
    /// Fixed RNG seed for reproducible name sampling.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let opts = synth::GenerateOptions {
        samples: args.samples,
        with_country: args.country,
        seed: args.seed,
    };
    let path = synth::generate_dataset(&settings, opts).await?;
    println!("{}", path.display());
    Ok(())
}
