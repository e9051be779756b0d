/// Pq: the precision of the Qk quantization values. Value 0 indicates 8-bit
/// Qk values; a nonzero value indicates 16-bit Qk values.
///
/// Baseline DCT only ever uses 8-bit values. A table declaring 16-bit
/// precision is still accepted, but its 64 entries are read as single bytes
/// all the same (16-bit quantization values are not supported).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SamplePrecision {
    EightBit,
    SixteenBit,
}

impl SamplePrecision {
    pub(crate) fn decode(b: u8) -> Self {
        match b {
            0 => SamplePrecision::EightBit,
            _ => SamplePrecision::SixteenBit,
        }
    }
}
