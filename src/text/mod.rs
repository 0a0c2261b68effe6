//! Pure text utilities shared by every pipeline: tokenization and page
//! segmentation. Nothing here performs I/O or talks to a model.

pub mod segment;
pub mod tokenizer;
