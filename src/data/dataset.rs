//! Training-dataset persistence: JSON arrays of annotated examples.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::{config::Settings, nlp::align::AnnotatedExample};

/// Write `examples` as a JSON array to `<data_dir>/<timestamp>.json` and
/// return the path.
pub fn persist_examples(examples: &[AnnotatedExample], settings: &Settings) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = settings.join_data(format!("{stamp}.json"));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path).with_context(|| format!("create {path:?}"))?;
    serde_json::to_writer(file, examples).context("serializing examples")?;
    info!(path = %path.display(), count = examples.len(), "saved training examples");
    Ok(path)
}

/// Load a file of raw synthetic records (a JSON array of objects) for
/// re-alignment. Individual record shapes are validated later, per record;
/// only a file that is not a JSON array at all is an error here.
pub fn load_records(path: &Path) -> Result<Vec<serde_json::Value>> {
    let file = File::open(path).with_context(|| format!("open {path:?}"))?;
    let records: Vec<serde_json::Value> =
        serde_json::from_reader(BufReader::new(file)).context("parsing record file")?;
    info!(path = %path.display(), count = records.len(), "loaded raw records");
    Ok(records)
}
