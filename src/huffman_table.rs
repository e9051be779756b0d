use std::iter;

use crate::cursor::ByteCursor;
use crate::error::{ParseError, Result};

/// Tc: whether a table decodes DC coefficients or AC coefficients.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HuffmanClass {
    Dc,
    Ac,
}

impl HuffmanClass {
    pub(crate) fn decode(tc: u8) -> Self {
        match tc {
            0 => HuffmanClass::Dc,
            _ => HuffmanClass::Ac,
        }
    }
}

/// One canonical code: its bit length (1-16), the code value itself, and the
/// symbol byte the code decodes to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HuffmanCode {
    pub length: u8,
    pub code: u16,
    pub value: u8,
}

/// A Huffman table rebuilt from its compact DHT representation (16 per-length
/// code counts plus a flat symbol list).
///
/// `codes` is ordered by ascending bit length, then ascending code value.
/// The canonical assignment below produces that order by construction, and
/// prefix-tree reconstruction downstream depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTable {
    pub class: HuffmanClass,

    /// Th: Specifies one of four possible destinations at the decoder into
    /// which the table shall be installed. The identifier is kept exactly as
    /// it appears on the wire, conformant or not.
    pub destination_id: u8,

    pub codes: Vec<HuffmanCode>,
}

impl HuffmanTable {
    /// Reconstructs the table from per-length code counts and the flat symbol
    /// list, per the canonical JPEG DHT convention: symbol i takes the ith
    /// length in ascending-length expansion order, and code values count up
    /// within a length, doubling whenever the length increases.
    ///
    /// A returned error carries offset 0 here; `decode` rewrites it to the
    /// table's position in the stream.
    pub fn from_counts(
        class: HuffmanClass,
        destination_id: u8,
        code_counts: &[u8; 16],
        symbols: &[u8],
    ) -> Result<Self> {
        let code_count: usize = code_counts.iter().map(|&c| c as usize).sum();
        if code_count > 256 || code_count != symbols.len() {
            return Err(ParseError::InvalidHuffmanTable {
                offset: 0,
                code_count,
                symbol_count: symbols.len(),
            });
        }

        let mut lengths = Vec::with_capacity(code_count);
        for (idx, &count) in code_counts.iter().enumerate() {
            lengths.extend(iter::repeat(idx as u8 + 1).take(count as usize));
        }

        let codes = lengths
            .iter()
            .zip(assign_codes(&lengths))
            .zip(symbols)
            .map(|((&length, code), &value)| HuffmanCode {
                length,
                code,
                value,
            })
            .collect();

        Ok(HuffmanTable {
            class,
            destination_id,
            codes,
        })
    }

    /// Decodes one table from a DHT segment payload, positioned just past the
    /// Tc/Th byte (the scanner reads that byte, since a segment may carry
    /// several tables back-to-back).
    pub(crate) fn decode(
        cursor: &mut ByteCursor,
        class: HuffmanClass,
        destination_id: u8,
    ) -> Result<Self> {
        let table_offset = cursor.position();

        let mut code_counts = [0u8; 16];
        code_counts.copy_from_slice(cursor.read_bytes(16)?);

        let code_count: usize = code_counts.iter().map(|&c| c as usize).sum();
        let symbols = cursor.read_bytes(code_count)?;

        HuffmanTable::from_counts(class, destination_id, &code_counts, symbols).map_err(|err| {
            match err {
                ParseError::InvalidHuffmanTable {
                    code_count,
                    symbol_count,
                    ..
                } => ParseError::InvalidHuffmanTable {
                    offset: table_offset,
                    code_count,
                    symbol_count,
                },
                other => other,
            }
        })
    }
}

/// The canonical-code walk. Whenever the next entry's length exceeds the
/// current one, the running code doubles once per extra bit, so each length's
/// code space starts at twice where the previous length left off.
///
/// Assignment stops once the length passes 16 or the code reaches 0xFFFF:
/// both mean the table is over-subscribed. The remaining symbols are left
/// without codes; the code value never wraps around.
fn assign_codes(lengths: &[u8]) -> Vec<u16> {
    let mut codes = Vec::with_capacity(lengths.len());

    let Some(&first) = lengths.first() else {
        return codes;
    };

    let mut code: u16 = 0;
    let mut current_length = first;

    for &length in lengths {
        while length > current_length {
            code <<= 1;
            current_length += 1;
        }
        codes.push(code);
        if current_length > 16 || code == 0xFFFF {
            break;
        }
        code += 1;
    }

    codes
}
