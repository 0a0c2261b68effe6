//! PDF human-name extraction toolkit.
//!
//! Two pipelines share one text core: segment PDF pages into cleaned
//! paragraph or sentence chunks, then hand each chunk either to a locally
//! hosted LLM (Ollama) with a name-extraction prompt, or to a GLiNER-style
//! NER inference service. A third pipeline generates synthetic labeled
//! training data and aligns the declared entities back onto token spans.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
pub mod text;
