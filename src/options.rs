use std::path::{Path, PathBuf};

use clap::Parser;

use crate::data::loader::MissingSourcePolicy;
use crate::data::model::{ByteOrder, Counts, Delimiter};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Convert rows of delimited floats into a flat binary f64 file.
///
/// Usage: make-dataset --source=image_dataset.csv --output=image_dataset.bin
#[derive(Parser, Debug, Default)]
#[command(name = "make-dataset", version)]
pub struct Cli {
    /// Source text file, one row per line
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Output file [default: source with a .bin extension]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Token separator; chosen from the source extension when omitted
    #[arg(long, value_enum)]
    pub delimiter: Option<Delimiter>,

    /// What to do when the source path does not exist
    #[arg(long, value_enum, default_value_t = MissingSourcePolicy::Empty)]
    pub missing_source: MissingSourcePolicy,

    /// Byte order of the written values
    #[arg(long, value_enum, default_value_t = ByteOrder::Native)]
    pub byte_order: ByteOrder,

    /// Inputs per row; writes a counts header together with --outputs
    #[arg(long, requires = "outputs", value_name = "N")]
    pub inputs: Option<u32>,

    /// Outputs per row; writes a counts header together with --inputs
    #[arg(long, requires = "inputs", value_name = "N")]
    pub outputs: Option<u32>,

    /// Print a JSON summary of the conversion to stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

/// Everything the pipeline needs, fixed before any file is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub source: PathBuf,
    pub output: PathBuf,
    pub delimiter: Option<Delimiter>,
    pub missing_source: MissingSourcePolicy,
    pub byte_order: ByteOrder,
    pub counts: Option<Counts>,
}

impl Options {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Options {
            output: default_output(&source),
            source,
            delimiter: None,
            missing_source: MissingSourcePolicy::default(),
            byte_order: ByteOrder::default(),
            counts: None,
        }
    }

    /// Resolve parsed flags. Fails with [`Error::MissingSource`] when no
    /// source was given.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let source = match &cli.source {
            Some(s) if !s.as_os_str().is_empty() => s.clone(),
            _ => return Err(Error::MissingSource),
        };

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(&source));

        let counts = match (cli.inputs, cli.outputs) {
            (Some(inputs), Some(outputs)) => Some(Counts { inputs, outputs }),
            _ => None,
        };

        log::debug!("Source: {}", source.display());
        log::debug!("Output: {}", output.display());

        Ok(Options {
            source,
            output,
            delimiter: cli.delimiter,
            missing_source: cli.missing_source,
            byte_order: cli.byte_order,
            counts,
        })
    }
}

/// Replace the source's extension with `.bin`.
pub fn default_output(source: &Path) -> PathBuf {
    source.with_extension("bin")
}
