use crate::error::{ParseError, Result};

/// A bounds-checked read position over the raw JPEG byte stream.
///
/// Every decoder threads the same cursor through its reads, so the offset is
/// the single source of truth for where parsing stands. Reads either advance
/// by exactly the bytes consumed or fail leaving the offset untouched.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, offset: 0 }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn require(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(ParseError::UnexpectedEof {
                offset: self.offset,
                needed: count - self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.require(1)?;
        let b = self.data[self.offset];
        self.offset += 1;
        Ok(b)
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.require(2)?;
        let v = u16::from_be_bytes([self.data[self.offset], self.data[self.offset + 1]]);
        self.offset += 2;
        Ok(v)
    }

    /// Borrows the next `count` bytes out of the underlying buffer.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.require(count)?;
        let slice = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.require(count)?;
        self.offset += count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_in_order() -> anyhow::Result<()> {
        let data = [0x01, 0xAB, 0xCD, b'h', b'i', 0xFF];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u8()?, 0x01);
        assert_eq!(cursor.read_u16_be()?, 0xABCD);
        assert_eq!(cursor.read_bytes(2)?, b"hi");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), 1);

        cursor.skip(1)?;
        assert_eq!(cursor.remaining(), 0);

        Ok(())
    }

    #[test]
    fn test_failed_read_leaves_offset_unchanged() -> anyhow::Result<()> {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(2)?;

        assert_eq!(
            cursor.read_bytes(4),
            Err(ParseError::UnexpectedEof {
                offset: 2,
                needed: 3
            })
        );
        assert_eq!(cursor.position(), 2);

        // the remaining byte is still readable after the failure
        assert_eq!(cursor.read_u8()?, 0x03);

        Ok(())
    }

    #[test]
    fn test_u16_needs_both_bytes() {
        let data = [0xFF];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(
            cursor.read_u16_be(),
            Err(ParseError::UnexpectedEof {
                offset: 0,
                needed: 1
            })
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_past_end_fails() {
        let mut cursor = ByteCursor::new(&[]);

        assert_eq!(
            cursor.skip(1),
            Err(ParseError::UnexpectedEof {
                offset: 0,
                needed: 1
            })
        );
    }
}
