use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Row – one line of the source file
// ---------------------------------------------------------------------------

/// Values parsed from a single line. Blank lines yield an empty row.
pub type Row = Vec<f64>;

// ---------------------------------------------------------------------------
// Dataset – the complete parsed source
// ---------------------------------------------------------------------------

/// All rows of a source file, in file order.
///
/// Rows are not required to share a width; the only consumer that cares is the
/// counts-header writer, which validates widths itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Dataset { rows }
    }

    /// Number of rows, blank ones included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of values across every row.
    pub fn value_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Row-major iterator over every value.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Concatenate all rows into one contiguous buffer.
    pub fn flatten(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.value_count());
        for row in &self.rows {
            out.extend_from_slice(row);
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Delimiter – token separator chosen from the file extension
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Space,
}

impl Delimiter {
    /// Map a file extension (without the dot) to a delimiter.
    ///
    /// Matching is case-insensitive and by substring, so `CSV` and `csv2` both
    /// select [`Delimiter::Comma`]. Anything unrecognised falls back to
    /// [`Delimiter::Space`].
    pub fn for_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        // `txt` and everything else are space separated
        if ext.contains("csv") {
            Delimiter::Comma
        } else {
            Delimiter::Space
        }
    }

    pub fn for_path(path: &std::path::Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default();
        Self::for_extension(&ext)
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Space => write!(f, "space"),
        }
    }
}

// ---------------------------------------------------------------------------
// ByteOrder – how each f64 is laid out on disk
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Whatever the host uses.
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// Whether this order matches the host's, so slices can be cast directly.
    pub fn is_native(self) -> bool {
        match self {
            ByteOrder::Native => true,
            ByteOrder::Little => cfg!(target_endian = "little"),
            ByteOrder::Big => cfg!(target_endian = "big"),
        }
    }

    pub fn f64_to_bytes(self, v: f64) -> [u8; 8] {
        match self {
            ByteOrder::Native => v.to_ne_bytes(),
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        }
    }

    pub fn f64_from_bytes(self, b: [u8; 8]) -> f64 {
        match self {
            ByteOrder::Native => f64::from_ne_bytes(b),
            ByteOrder::Little => f64::from_le_bytes(b),
            ByteOrder::Big => f64::from_be_bytes(b),
        }
    }

    pub fn u32_to_bytes(self, v: u32) -> [u8; 4] {
        match self {
            ByteOrder::Native => v.to_ne_bytes(),
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        }
    }

    pub fn u32_from_bytes(self, b: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Native => u32::from_ne_bytes(b),
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Native => write!(f, "native"),
            ByteOrder::Little => write!(f, "little"),
            ByteOrder::Big => write!(f, "big"),
        }
    }
}

// ---------------------------------------------------------------------------
// Counts – input/output split written in the optional header
// ---------------------------------------------------------------------------

/// Per-row split of values into model inputs and expected outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub inputs: u32,
    pub outputs: u32,
}

impl Counts {
    /// Values every row must hold. Summed in `u64` so two `u32::MAX`
    /// halves cannot overflow.
    pub fn row_width(&self) -> u64 {
        u64::from(self.inputs) + u64::from(self.outputs)
    }
}
