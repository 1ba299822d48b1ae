use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::model::{ByteOrder, Counts, Dataset};
use crate::error::{Error, Result};

/// Size of one encoded value.
pub const VALUE_SIZE: usize = std::mem::size_of::<f64>();

/// Size of the optional `[inputs u32][outputs u32]` prefix.
pub const COUNTS_HEADER_SIZE: usize = 2 * std::mem::size_of::<u32>();

/// Encode the dataset into the on-disk byte layout.
///
/// Without `counts` the result is just the flattened values. With `counts`
/// every non-empty row must hold exactly `inputs + outputs` values.
pub fn encode(dataset: &Dataset, order: ByteOrder, counts: Option<Counts>) -> Result<Vec<u8>> {
    let header_len = if counts.is_some() { COUNTS_HEADER_SIZE } else { 0 };
    let mut bytes = Vec::with_capacity(header_len + dataset.value_count() * VALUE_SIZE);

    if let Some(counts) = counts {
        check_row_widths(dataset, counts)?;
        bytes.extend_from_slice(&order.u32_to_bytes(counts.inputs));
        bytes.extend_from_slice(&order.u32_to_bytes(counts.outputs));
    }

    if order.is_native() {
        let values = dataset.flatten();
        bytes.extend_from_slice(bytemuck::cast_slice(&values));
    } else {
        for v in dataset.values() {
            bytes.extend_from_slice(&order.f64_to_bytes(v));
        }
    }

    Ok(bytes)
}

fn check_row_widths(dataset: &Dataset, counts: Counts) -> Result<()> {
    let expected = counts.row_width();
    for (i, row) in dataset.rows.iter().enumerate() {
        if !row.is_empty() && row.len() as u64 != expected {
            return Err(Error::RowWidth {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }
    }
    Ok(())
}

/// Write the dataset to `path`, truncating whatever was there.
///
/// Encoding happens before the file is created, so a width error leaves an
/// existing output untouched. An I/O failure during the write leaves a
/// partial file behind. Returns the number of bytes written.
pub fn write_dataset(
    path: &Path,
    dataset: &Dataset,
    order: ByteOrder,
    counts: Option<Counts>,
) -> Result<u64> {
    let bytes = encode(dataset, order, counts)?;

    let file = File::create(path).map_err(Error::io(path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(Error::io(path))?;
    writer.flush().map_err(Error::io(path))?;

    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len() as u64)
}
