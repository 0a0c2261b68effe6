//! Document input and dataset output.

pub mod dataset;
pub mod pdf;
