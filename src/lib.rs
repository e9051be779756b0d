//! Parser for the header segments of a JFIF-wrapped baseline JPEG stream.
//!
//! The parser walks the stream's marker-delimited segments, decodes the APP0
//! resolution/thumbnail metadata, reconstructs quantization tables, and
//! rebuilds canonical Huffman code tables from their compact on-disk
//! representation. Parsing stops at the first start-of-scan marker: the
//! entropy-coded image data itself is never decoded.

mod cursor;
mod error;
mod huffman_table;
mod jfif;
mod marker;
mod parser;
mod quantization_table;
mod sample_precision;

pub use cursor::ByteCursor;
pub use error::{ParseError, Result};
pub use huffman_table::{HuffmanClass, HuffmanCode, HuffmanTable};
pub use jfif::{DensityUnit, JfifHeader, JfifVersion, Rgb};
pub use parser::{DecodedJpegHeader, Parser};
pub use quantization_table::{QuantizationTable, QUANTIZATION_TABLE_BYTES};
pub use sample_precision::SamplePrecision;

/// Parses the header segments of an in-memory JPEG stream.
///
/// The caller supplies the fully materialized bytes; no I/O happens here.
pub fn parse(data: &[u8]) -> Result<DecodedJpegHeader> {
    Parser::new(data).parse()
}
