//! make-dataset
//!
//! Turns rows of comma- or space-separated floats into a flat stream of
//! 8-byte doubles for the training-set loader.

pub mod data;
pub mod error;
pub mod options;

use std::path::PathBuf;

use serde::Serialize;

use data::model::{ByteOrder, Counts, Delimiter};
pub use error::{Error, Result};
pub use options::{Cli, Options};

/// What a conversion did, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub delimiter: Delimiter,
    pub byte_order: ByteOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Counts>,
    pub rows: usize,
    pub values: usize,
    pub bytes: u64,
}

/// Read `options.source` completely, then write `options.output`.
pub fn run(options: &Options) -> Result<ConversionSummary> {
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| Delimiter::for_path(&options.source));

    let dataset = data::loader::load_text(&options.source, Some(delimiter), options.missing_source)?;
    let bytes = data::writer::write_dataset(
        &options.output,
        &dataset,
        options.byte_order,
        options.counts,
    )?;

    Ok(ConversionSummary {
        source: options.source.clone(),
        output: options.output.clone(),
        delimiter,
        byte_order: options.byte_order,
        counts: options.counts,
        rows: dataset.len(),
        values: dataset.value_count(),
        bytes,
    })
}
