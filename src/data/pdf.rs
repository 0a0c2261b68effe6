//! PDF page extraction backed by `pdf-extract`.
//!
//! `pdf-extract` returns the whole document as one string with form feeds
//! between pages and no layout blocks, so pages are recovered by splitting
//! on `\x0C` and paragraph blocks are approximated by blank lines.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use tracing::info;
use walkdir::WalkDir;

/// One page of extracted text.
#[derive(Debug, Clone)]
pub struct Page {
    /// Zero-based page number within the document.
    pub index: usize,
    pub text: String,
}

/// List `*.pdf` files directly under `dir`, sorted for a stable run order.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("pdf") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();
    info!(dir = %dir.display(), count = paths.len(), "discovered input documents");
    Ok(paths)
}

/// Extract the document's pages as text.
pub fn extract_pages(path: &Path) -> Result<Vec<Page>> {
    let text = pdf_extract::extract_text(path)
        .map_err(|err| anyhow!("extract text from {}: {err}", path.display()))?;
    Ok(text
        .split('\x0C')
        .enumerate()
        .map(|(index, page)| Page {
            index,
            text: page.to_string(),
        })
        .collect())
}

/// Approximate paragraph blocks by splitting on blank lines.
pub fn blocks(page_text: &str) -> Vec<String> {
    page_text
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// The slice of pages actually read: skip the leading `skip` pages, then
/// take at most `read`. Short documents yield a short (possibly empty)
/// window rather than an error.
pub fn page_window(pages: &[Page], skip: usize, read: usize) -> &[Page] {
    let start = skip.min(pages.len());
    let end = skip.saturating_add(read).min(pages.len());
    &pages[start..end]
}
