use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use super::model::{Dataset, Delimiter, Row};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Missing-file policy
// ---------------------------------------------------------------------------

/// What to do when the source path does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingSourcePolicy {
    /// Treat the file as an empty dataset and write a zero-length output.
    #[default]
    Empty,
    /// Fail with [`Error::SourceNotFound`].
    Error,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a delimited text file into a [`Dataset`].
///
/// `delimiter` defaults to [`Delimiter::for_path`] when `None`. The whole file
/// is parsed before returning; the first malformed token aborts the read.
pub fn load_text(
    path: &Path,
    delimiter: Option<Delimiter>,
    missing: MissingSourcePolicy,
) -> Result<Dataset> {
    if !path.exists() {
        return match missing {
            MissingSourcePolicy::Empty => {
                log::warn!("Source {} does not exist, writing an empty dataset", path.display());
                Ok(Dataset::default())
            }
            MissingSourcePolicy::Error => Err(Error::SourceNotFound(path.to_path_buf())),
        };
    }

    let delimiter = delimiter.unwrap_or_else(|| Delimiter::for_path(path));
    log::debug!("Reading {} with {delimiter} delimiter", path.display());

    let file = File::open(path).map_err(Error::io(path))?;
    let dataset = parse_text(BufReader::new(file), delimiter, path)?;

    log::info!(
        "Read {} rows ({} values) from {}",
        dataset.len(),
        dataset.value_count(),
        path.display()
    );
    Ok(dataset)
}

/// Parse already-opened text. `path` is only used in error messages.
pub fn parse_text<R: BufRead>(reader: R, delimiter: Delimiter, path: &Path) -> Result<Dataset> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::io(path))?;
        rows.push(parse_row(&line, delimiter, path, i + 1)?);
    }
    Ok(Dataset::from_rows(rows))
}

/// Parse one line. Line and column numbers in errors are 1-based.
fn parse_row(line: &str, delimiter: Delimiter, path: &Path, line_no: usize) -> Result<Row> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Row::new());
    }

    line.split(delimiter.as_char())
        .enumerate()
        .map(|(j, tok)| {
            tok.trim()
                .parse::<f64>()
                .map_err(|source| Error::NumberFormat {
                    path: path.to_path_buf(),
                    line: line_no,
                    column: j + 1,
                    token: tok.to_string(),
                    source,
                })
        })
        .collect()
}
