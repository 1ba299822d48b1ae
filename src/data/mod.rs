/// Data layer: core types, text parsing, and binary packing.
///
/// Architecture:
/// ```text
///  .csv / .txt / other
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse lines → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Row>, row-major
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  [counts header] + f64 bytes → .bin
///   └──────────┘
/// ```
///
/// `decode` reads the binary layout back.

pub mod decode;
pub mod loader;
pub mod model;
pub mod writer;
