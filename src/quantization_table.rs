use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::sample_precision::SamplePrecision;

pub const QUANTIZATION_TABLE_BYTES: usize = 64;

/// The set of 64 quantization values used to quantize the DCT coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizationTable {
    /// Pq: Specifies the precision of the Qk values. Pq shall be zero for
    /// 8-bit sample precision.
    pub precision: SamplePrecision,

    /// Tq: Specifies one of four possible destinations at the decoder into
    /// which the quantization table shall be installed.
    pub destination_id: u8,

    /// Qk: Specifies the kth element out of 64 elements, where k is the index
    /// in the zig-zag ordering of the DCT coefficients. The elements are kept
    /// in the zig-zag scan order they appear in on the wire.
    pub elements: [u8; QUANTIZATION_TABLE_BYTES],
}

impl QuantizationTable {
    /// Decodes a single table from a DQT segment payload. A segment may carry
    /// several tables back-to-back; the caller loops until the declared
    /// segment length is consumed.
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let pq_tq = cursor.read_u8()?;
        let precision = SamplePrecision::decode(pq_tq >> 4);
        let destination_id = pq_tq & 0x0F;

        let mut elements = [0u8; QUANTIZATION_TABLE_BYTES];
        elements.copy_from_slice(cursor.read_bytes(QUANTIZATION_TABLE_BYTES)?);

        Ok(QuantizationTable {
            precision,
            destination_id,
            elements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_decode_roundtrips_wire_order() -> anyhow::Result<()> {
        let mut payload = vec![0x03]; // 8-bit precision, destination 3
        payload.extend((0..64).map(|k| (k * 2) as u8));

        let mut cursor = ByteCursor::new(&payload);
        let table = QuantizationTable::decode(&mut cursor)?;

        assert_eq!(table.destination_id, 3);
        assert_eq!(table.precision, SamplePrecision::EightBit);
        for k in 0..64 {
            assert_eq!(table.elements[k], (k * 2) as u8);
        }
        assert_eq!(cursor.remaining(), 0);

        Ok(())
    }

    #[test]
    fn test_sixteen_bit_flag_still_reads_single_bytes() -> anyhow::Result<()> {
        let mut payload = vec![0x10]; // 16-bit precision, destination 0
        payload.extend([7u8; 64]);

        let mut cursor = ByteCursor::new(&payload);
        let table = QuantizationTable::decode(&mut cursor)?;

        assert_eq!(table.precision, SamplePrecision::SixteenBit);
        assert_eq!(table.elements, [7u8; 64]);
        // exactly 65 bytes consumed, not 129
        assert_eq!(cursor.position(), 65);

        Ok(())
    }

    #[test]
    fn test_truncated_table_fails_with_eof() {
        // identifier byte plus only 54 of the 64 element bytes
        let mut payload = vec![0x00];
        payload.extend([1u8; 54]);

        let mut cursor = ByteCursor::new(&payload);
        assert_eq!(
            QuantizationTable::decode(&mut cursor),
            Err(ParseError::UnexpectedEof {
                offset: 1,
                needed: 10
            })
        );
    }
}
