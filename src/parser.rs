use std::collections::HashMap;

use log::debug;

use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};
use crate::huffman_table::{HuffmanClass, HuffmanTable};
use crate::jfif::JfifHeader;
use crate::marker::Marker;
use crate::quantization_table::QuantizationTable;

/// Everything the header segments of a baseline JPEG stream describe, up to
/// the start of entropy-coded data.
///
/// Tables live in maps keyed by their wire identifier: only identifiers 0-3
/// are conformant, but whatever nibble appears on the wire is preserved, and
/// a repeated identifier overwrites the earlier table (last write wins).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedJpegHeader {
    pub jfif: Option<JfifHeader>,
    pub quantization_tables: HashMap<u8, QuantizationTable>,
    pub dc_huffman_tables: HashMap<u8, HuffmanTable>,
    pub ac_huffman_tables: HashMap<u8, HuffmanTable>,
}

/// Walks the stream marker by marker and dispatches each segment payload to
/// its decoder.
///
/// The walk is a single forward pass: a non-marker byte in scanning position
/// is fatal (no resync is attempted), and the first start-of-scan marker ends
/// structured parsing — everything after it is opaque entropy data under the
/// single-scan assumption. A stream that simply runs out of bytes before any
/// start-of-scan yields whatever header data was collected.
pub struct Parser<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Parser {
            cursor: ByteCursor::new(data),
        }
    }

    pub fn parse(mut self) -> Result<DecodedJpegHeader> {
        let mut header = DecodedJpegHeader::default();

        while self.cursor.remaining() > 0 {
            let prefix_offset = self.cursor.position();
            let prefix = self.cursor.read_u8()?;
            if prefix != Marker::PREFIX {
                return Err(ParseError::InvalidMarkerPrefix {
                    offset: prefix_offset,
                    found: prefix,
                });
            }

            let code = self.cursor.read_u8()?;
            let marker = Marker::from_u8(code);

            if marker.is_some_and(Marker::standalone) {
                continue;
            }

            // the declared length counts its own two bytes
            let length = self.cursor.read_u16_be()? as usize;
            let segment_end = self.cursor.position() + length.saturating_sub(2);

            debug!(
                "marker {:#04x} at offset {}, segment ends at {}",
                code, prefix_offset, segment_end
            );

            match marker {
                Some(Marker::APP0) => {
                    header.jfif = Some(JfifHeader::decode(&mut self.cursor)?);
                    self.resync(segment_end)?;
                }
                Some(Marker::DQT) => {
                    while self.cursor.position() < segment_end {
                        let table = QuantizationTable::decode(&mut self.cursor)?;
                        header.quantization_tables.insert(table.destination_id, table);
                    }
                }
                Some(Marker::DHT) => {
                    while self.cursor.position() < segment_end {
                        let tc_th = self.cursor.read_u8()?;
                        let class = HuffmanClass::decode(tc_th >> 4);
                        let destination_id = tc_th & 0x0F;

                        let table = HuffmanTable::decode(&mut self.cursor, class, destination_id)?;
                        match class {
                            HuffmanClass::Dc => header.dc_huffman_tables.insert(destination_id, table),
                            HuffmanClass::Ac => header.ac_huffman_tables.insert(destination_id, table),
                        };
                    }
                }
                Some(Marker::SOS) => {
                    // single-scan assumption: the rest of the stream is
                    // entropy-coded data and is discarded unread
                    debug!(
                        "start of scan at offset {}, discarding {} trailing bytes",
                        prefix_offset,
                        self.cursor.remaining()
                    );
                    self.cursor.skip(self.cursor.remaining())?;
                    break;
                }
                // frame geometry is out of scope here, and unrecognized
                // markers are skipped whole
                Some(Marker::SOF0) | None => {
                    debug!("ignoring marker {:#04x} of length {}", code, length);
                    self.resync(segment_end)?;
                }
                // consumed before the length read
                Some(Marker::SOI) | Some(Marker::EOI) => {
                    unreachable!("standalone markers carry no length")
                }
            }
        }

        Ok(header)
    }

    /// Skips any declared-but-undecoded payload bytes so the next iteration
    /// starts exactly at the segment boundary.
    fn resync(&mut self, segment_end: usize) -> Result<()> {
        let position = self.cursor.position();
        if position < segment_end {
            self.cursor.skip(segment_end - position)?;
        }
        Ok(())
    }
}
