//! Reading the binary layout back, for inspection and verification.

use super::model::{ByteOrder, Counts, Row};
use super::writer::{COUNTS_HEADER_SIZE, VALUE_SIZE};
use crate::error::{Error, Result};

/// Decode a flat stream of 8-byte values.
pub fn decode_values(bytes: &[u8], order: ByteOrder) -> Result<Vec<f64>> {
    if bytes.len() % VALUE_SIZE != 0 {
        return Err(Error::TruncatedValue { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(VALUE_SIZE)
        .map(|b| {
            let mut buf = [0u8; VALUE_SIZE];
            buf.copy_from_slice(b);
            order.f64_from_bytes(buf)
        })
        .collect())
}

/// Split off the `[inputs u32][outputs u32]` prefix.
pub fn split_counts_header(bytes: &[u8], order: ByteOrder) -> Result<(Counts, &[u8])> {
    if bytes.len() < COUNTS_HEADER_SIZE {
        return Err(Error::TruncatedHeader { len: bytes.len() });
    }
    let (header, rest) = bytes.split_at(COUNTS_HEADER_SIZE);
    let word = |i: usize| {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&header[i * 4..i * 4 + 4]);
        order.u32_from_bytes(buf)
    };
    Ok((
        Counts {
            inputs: word(0),
            outputs: word(1),
        },
        rest,
    ))
}

/// Cut a flat value stream back into rows of the given lengths.
///
/// Values past the sum of `lengths` are dropped; a short stream yields short
/// trailing rows.
pub fn reshape(values: &[f64], lengths: &[usize]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(lengths.len());
    let mut offset: usize = 0;
    for &len in lengths {
        let end = offset.saturating_add(len).min(values.len());
        rows.push(values[offset..end].to_vec());
        offset = end;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dataset;
    use crate::data::writer::encode;

    #[test]
    fn known_bytes() {
        // 1.4, -1.8, 1.0 little endian
        let raw = [
            0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0xF6, 0x3F,
            0xCD, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0xBF,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F,
        ];
        assert_eq!(decode_values(&raw, ByteOrder::Little).unwrap(), vec![1.4, -1.8, 1.0]);
    }

    #[test]
    fn partial_value_is_rejected() {
        assert!(matches!(
            decode_values(&[0u8; 12], ByteOrder::Native),
            Err(Error::TruncatedValue { len: 12 })
        ));
    }

    #[test]
    fn header_round_trip() {
        let ds = Dataset::from_rows(vec![vec![0.1, 0.2, 0.3]]);
        let counts = Counts { inputs: 2, outputs: 1 };
        let bytes = encode(&ds, ByteOrder::Big, Some(counts)).unwrap();

        let (read, rest) = split_counts_header(&bytes, ByteOrder::Big).unwrap();
        assert_eq!(read, counts);
        assert_eq!(decode_values(rest, ByteOrder::Big).unwrap(), ds.flatten());
        assert!(split_counts_header(&bytes[..5], ByteOrder::Big).is_err());
    }

    #[test]
    fn reshape_restores_ragged_rows() {
        let ds = Dataset::from_rows(vec![
            vec![f64::MIN_POSITIVE, 1e300],
            vec![],
            vec![-0.0, 0.1 + 0.2, 123456.789],
        ]);
        let bytes = encode(&ds, ByteOrder::Native, None).unwrap();
        let values = decode_values(&bytes, ByteOrder::Native).unwrap();
        let rows = reshape(&values, &ds.row_lengths());

        assert_eq!(rows.len(), ds.rows.len());
        for (a, b) in rows.iter().flatten().zip(ds.values()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn reshape_short_stream() {
        assert_eq!(reshape(&[1.0, 2.0, 3.0], &[2, 2]), vec![vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn reshape_huge_length_does_not_overflow() {
        assert_eq!(reshape(&[1.0], &[1, usize::MAX]), vec![vec![1.0], vec![]]);
    }
}
