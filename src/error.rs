use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Every error is fatal to the parse in progress: a corrupt header makes
/// the entropy-coded data that follows it meaningless, so decoders propagate
/// immediately and no partial header is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A read or skip would run past the end of the buffer.
    #[error("unexpected end of stream at offset {offset}: {needed} more bytes needed")]
    UnexpectedEof { offset: usize, needed: usize },

    /// A byte in marker-scanning position was not the 0xFF marker prefix.
    #[error("expected marker prefix 0xFF at offset {offset}, found {found:#04x}")]
    InvalidMarkerPrefix { offset: usize, found: u8 },

    /// APP0 density-unit byte outside the three values JFIF defines.
    #[error("unknown density unit {value:#04x} at offset {offset}")]
    UnknownDensityUnit { offset: usize, value: u8 },

    /// DHT code counts disagree with the symbol list, or overflow 256 codes.
    #[error("invalid huffman table at offset {offset}: {code_count} codes declared for {symbol_count} symbols")]
    InvalidHuffmanTable {
        offset: usize,
        code_count: usize,
        symbol_count: usize,
    },
}
